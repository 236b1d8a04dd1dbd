//! Startup failures, before any prompt is shown.

use assert_cmd::Command;
use predicates::prelude::*;

fn kpick() -> Command {
    Command::cargo_bin("kpick").unwrap()
}

#[test]
fn help() {
    kpick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--kubeconfig"))
        .stdout(predicate::str::contains("--filter"));
}

#[test]
fn version() {
    kpick()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_kubectl() {
    let dir = tempfile::tempdir().unwrap();
    kpick()
        .env("PATH", dir.path())
        .env("HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Looking up kubectl"))
        .stderr(predicate::str::contains("kubectl not found on PATH"));
}

#[cfg(unix)]
#[test]
fn missing_config() {
    let dir = tempfile::tempdir().unwrap();
    kpick()
        .args(["--kubectl", "sh"])
        .env("HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loading contexts"))
        .stderr(predicate::str::contains("Reading kube config"))
        .stderr(predicate::str::contains(".kube/config"));
}

#[cfg(unix)]
#[test]
fn unparseable_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("kc");
    std::fs::write(&config, "contexts: [\n").unwrap();
    kpick()
        .args(["--kubectl", "sh", "--kubeconfig"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parsing kube config"));
}

//! Running the external kubectl binary.
//!
//! The binary is looked up once, at startup, and the resulting [`Kubectl`] is
//! passed to whatever needs to shell out.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

pub const DEFAULT_EXECUTABLE: &str = "kubectl";

/// Something that can run kubectl with a list of arguments.
pub trait CommandRunner {
    /// Run with stdout and stderr passed straight through to the terminal.
    fn run(&self, args: &[String]) -> Result<()>;

    /// Run with stdout captured. Stderr still goes to the terminal.
    fn capture(&self, args: &[String]) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct Kubectl {
    executable: PathBuf,
}

impl Kubectl {
    /// Resolve `name` through `PATH`. A name containing a path separator is
    /// checked in place instead.
    pub fn locate(name: impl AsRef<OsStr>) -> Result<Kubectl> {
        let name = name.as_ref();
        let executable = which::which(name).map_err(|source| Error::ExecutableNotFound {
            name: name.to_string_lossy().into_owned(),
            source,
        })?;
        debug!("Using {}", executable.display());
        Ok(Kubectl { executable })
    }

    fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(args);
        cmd
    }

    fn describe(&self, args: &[String]) -> String {
        let mut command = self.executable.display().to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }
}

impl CommandRunner for Kubectl {
    fn run(&self, args: &[String]) -> Result<()> {
        let command = self.describe(args);
        debug!("Running {command}");

        let status = self
            .command(args)
            .status()
            .map_err(|source| Error::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed { command, status });
        }
        Ok(())
    }

    fn capture(&self, args: &[String]) -> Result<Vec<u8>> {
        let command = self.describe(args);
        debug!("Running {command} (capturing output)");

        let output = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| Error::CommandSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command,
                status: output.status,
            });
        }
        Ok(output.stdout)
    }
}

// region: Argument templates
pub fn use_context_args(context: &str) -> Vec<String> {
    vec!["config".into(), "use-context".into(), context.into()]
}

pub fn set_namespace_args(namespace: &str) -> Vec<String> {
    vec![
        "config".into(),
        "set-context".into(),
        "--current".into(),
        format!("--namespace={namespace}"),
    ]
}

pub fn get_namespaces_args(context: &str) -> Vec<String> {
    vec![
        "get".into(),
        "namespace".into(),
        "--context".into(),
        context.into(),
    ]
}
// endregion

pub fn use_context(runner: &impl CommandRunner, context: &str) -> Result<()> {
    runner.run(&use_context_args(context))
}

/// Sets the namespace of whatever context is current.
pub fn set_namespace(runner: &impl CommandRunner, namespace: &str) -> Result<()> {
    runner.run(&set_namespace_args(namespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_templates() {
        assert_eq!(use_context_args("prod"), ["config", "use-context", "prod"]);
        assert_eq!(
            set_namespace_args("kube-system"),
            ["config", "set-context", "--current", "--namespace=kube-system"]
        );
        assert_eq!(
            get_namespaces_args("prod"),
            ["get", "namespace", "--context", "prod"]
        );
    }

    #[test]
    fn missing_executable() {
        let err = Kubectl::locate("definitely-not-a-real-kubectl-binary").unwrap_err();
        assert!(matches!(err, Error::ExecutableNotFound { .. }), "{err:?}");
        assert!(err.to_string().contains("definitely-not-a-real-kubectl-binary"));
    }

    #[cfg(unix)]
    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[cfg(unix)]
    #[test]
    fn run_and_capture_real_processes() {
        let sh_bin = Kubectl::locate("sh").unwrap();

        let out = sh_bin.capture(&sh("printf 'NAME\\ndefault\\n'")).unwrap();
        assert_eq!(out, b"NAME\ndefault\n");

        sh_bin.run(&sh("true")).unwrap();

        let err = sh_bin.run(&sh("exit 3")).unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }), "{err:?}");
        assert!(err.to_string().contains("exit 3"));

        let err = sh_bin.capture(&sh("exit 1")).unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }), "{err:?}");
    }
}

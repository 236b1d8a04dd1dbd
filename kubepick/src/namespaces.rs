use log::{debug, warn};

use crate::error::Result;
use crate::kubectl::{get_namespaces_args, CommandRunner};

/// Namespaces visible under `context`, in the order kubectl printed them.
pub fn list_namespaces(runner: &impl CommandRunner, context: &str) -> Result<Vec<String>> {
    let output = runner.capture(&get_namespaces_args(context))?;
    let namespaces = parse_namespaces(&String::from_utf8_lossy(&output));
    debug!("{} namespaces in {context}", namespaces.len());
    Ok(namespaces)
}

/// Parse the table printed by `kubectl get namespace`:
///
/// ```text
/// NAME              STATUS   AGE
/// default           Active   14d
/// kube-system       Active   14d
/// ```
///
/// The header is dropped and the first column of every other line kept.
/// Blank lines are skipped.
pub fn parse_namespaces(output: &str) -> Vec<String> {
    output
        .lines()
        .enumerate()
        .skip(1)
        .filter_map(|(index, line)| match line.split_whitespace().next() {
            Some(name) => Some(name.to_owned()),
            None => {
                warn!("Skipping malformed line {} of namespace list", index + 1);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_column() {
        let out = "NAME STATUS AGE\ndefault Active 14d\nkube-system Active 14d\n";
        assert_eq!(parse_namespaces(out), vec!["default", "kube-system"]);
    }

    #[test]
    fn aligned_columns() {
        let out = "NAME              STATUS   AGE\n\
                   default           Active   14d\n\
                   kube-node-lease   Active   14d\n";
        assert_eq!(parse_namespaces(out), vec!["default", "kube-node-lease"]);
    }

    #[test]
    fn header_only() {
        assert!(parse_namespaces("NAME STATUS AGE\n").is_empty());
        assert!(parse_namespaces("").is_empty());
    }

    #[test]
    fn short_and_blank_lines() {
        let out = "NAME STATUS AGE\nlonely\n\n   \nkube-public Active 3d\n";
        assert_eq!(parse_namespaces(out), vec!["lonely", "kube-public"]);
    }

    #[test]
    fn keeps_kubectl_order() {
        let out = "NAME STATUS AGE\nzeta Active 1d\nalpha Active 2d\n";
        assert_eq!(parse_namespaces(out), vec!["zeta", "alpha"]);
    }

    #[test]
    fn crlf_output() {
        let out = "NAME STATUS AGE\r\ndefault Active 14d\r\n";
        assert_eq!(parse_namespaces(out), vec!["default"]);
    }
}

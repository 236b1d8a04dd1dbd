use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{name} not found on PATH")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("HOME is not set, can't locate the kube config")]
    HomeNotSet,

    #[error("Reading kube config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parsing kube config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Selection cancelled: {prompt}")]
    SelectionCancelled { prompt: String },

    #[error("Nothing to choose from: {prompt}")]
    NothingToSelect { prompt: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Could not start `{command}`")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed ({status})")]
    CommandFailed { command: String, status: ExitStatus },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_name_the_file() {
        let err = Error::ConfigRead {
            path: PathBuf::from("/home/me/.kube/config"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Reading kube config /home/me/.kube/config");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn cancelled_names_the_prompt() {
        let err = Error::SelectionCancelled {
            prompt: "Select context".into(),
        };
        assert_eq!(err.to_string(), "Selection cancelled: Select context");
    }
}

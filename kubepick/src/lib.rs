pub mod config;
pub mod error;
pub mod flow;
pub mod kubectl;
pub mod namespaces;
pub mod prompt;

pub use config::{default_config_path, kube_dir, Context, KubeConfig};
pub use error::{Error, Result};
pub use flow::{run, Outcome};
pub use kubectl::{CommandRunner, Kubectl};
pub use prompt::{FilterMode, SelectionList, Selector, TerminalSelector};

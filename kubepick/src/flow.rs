//! Context, then optionally namespace.

use crate::config::KubeConfig;
use crate::error::Result;
use crate::kubectl::{set_namespace, use_context, CommandRunner};
use crate::namespaces::list_namespaces;
use crate::prompt::{FilterMode, SelectionList, Selector};

pub const CONTEXT_PROMPT: &str = "Select context";
pub const SET_NAMESPACE_PROMPT: &str = "Set Namespace for current context?";
pub const NAMESPACE_PROMPT: &str = "Select namespace";

pub const NO: &str = "no";
pub const YES: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub context: String,
    pub namespace: Option<String>,
}

/// Ask for a context and switch to it, then offer to set the namespace too.
///
/// Changes are applied as soon as they're chosen: if picking the namespace
/// fails the context switch stays.
pub fn run(
    kube_config: &KubeConfig,
    runner: &impl CommandRunner,
    selector: &impl Selector,
    filter: FilterMode,
) -> Result<Outcome> {
    let contexts = SelectionList::new(CONTEXT_PROMPT, kube_config.context_names())
        .filter(filter)
        .start_at(kube_config.current_context_index().unwrap_or(0));
    let context = selector.select(&contexts)?;

    use_context(runner, &context)?;

    let set_namespace_too =
        SelectionList::new(SET_NAMESPACE_PROMPT, vec![NO.into(), YES.into()]).page_size(2);
    if selector.select(&set_namespace_too)? != YES {
        return Ok(Outcome {
            context,
            namespace: None,
        });
    }

    let namespaces =
        SelectionList::new(NAMESPACE_PROMPT, list_namespaces(runner, &context)?).filter(filter);
    let namespace = selector.select(&namespaces)?;

    set_namespace(runner, &namespace)?;

    Ok(Outcome {
        context,
        namespace: Some(namespace),
    })
}

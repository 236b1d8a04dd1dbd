use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::*;
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};

// region: Context
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Context {
    pub name: String,
    /// Cluster, user, namespace and whatever else kubectl keeps here. Never interpreted.
    #[serde(default)]
    pub context: BTreeMap<String, YamlValue>,
}
// endregion

// region: Config
/// The two fields of a kube config this tool cares about. Everything else in
/// the file (clusters, users, preferences, ...) is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct KubeConfig {
    /// kubectl writes `contexts: null` for a config with none.
    #[serde(deserialize_with = "null_as_empty")]
    pub contexts: Vec<Context>,
    pub current_context: String,
}

impl KubeConfig {
    pub fn read_from(path: impl AsRef<Path>) -> Result<KubeConfig> {
        let path = path.as_ref();
        debug!("Reading kube config from {}", path.display());

        // Read fully up front so the file is closed before any prompting.
        let data = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_owned(),
            source,
        })?;

        let kube_config = Self::parse(&data).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })?;
        debug!("Found {} contexts", kube_config.contexts.len());

        Ok(kube_config)
    }

    pub fn parse(data: &str) -> std::result::Result<KubeConfig, serde_yaml::Error> {
        serde_yaml::from_str(data)
    }

    /// Context names in file order.
    pub fn context_names(&self) -> Vec<String> {
        self.contexts.iter().map(|ctx| ctx.name.clone()).collect()
    }

    pub fn current_context_index(&self) -> Option<usize> {
        self.contexts
            .iter()
            .position(|ctx| ctx.name == self.current_context)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Context>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Context>>::deserialize(deserializer)?.unwrap_or_default())
}
// endregion

pub fn kube_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or(Error::HomeNotSet)?;
    Ok(Path::new(&home).join(".kube"))
}

pub fn default_config_path() -> Result<PathBuf> {
    kube_dir().map(|dir| dir.join("config"))
}

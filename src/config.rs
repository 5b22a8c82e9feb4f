use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::grammar::Grammar;
use crate::registry::Signature;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GroxConfig {
    /// URI bound to the empty prefix
    pub default_namespace: Option<String>,
    /// Extra prefixes registered on top of the seeded ones
    #[serde(default)]
    pub namespaces: BTreeMap<String, String>,
    /// Seed the categorization terms
    #[serde(default)]
    pub categorization: bool,
    /// Abort document loading on the first failing record
    #[serde(default)]
    pub strict: bool,
}

impl GroxConfig {
    /// Register the configured namespaces with a grammar
    pub fn apply<S: Signature>(&self, grammar: &mut Grammar<S>) -> crate::Result<()> {
        if let Some(uri) = &self.default_namespace {
            grammar.add_namespace("", uri)?;
        }
        for (prefix, uri) in &self.namespaces {
            grammar.add_namespace(prefix, uri)?;
        }
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("grox.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<GroxConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: GroxConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &GroxConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

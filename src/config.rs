//! Configuration management for the generator.
//!
//! Settings live in an optional `autogen.toml` inside the dev directory.
//! A missing file means "use the defaults"; a malformed one is an error.

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_NAMESPACE, DEFAULT_RESOURCES_ROOT};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mod namespace used in resource paths and texture references
    pub namespace: String,
    /// Root of the `assets/` and `data/` trees, relative to the dev directory
    pub resources_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            resources_root: PathBuf::from(DEFAULT_RESOURCES_ROOT),
        }
    }
}

impl Config {
    /// Path of the configuration file for a given dev directory.
    pub fn config_file_path(dev_dir: &Path) -> PathBuf {
        dev_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads configuration from `<dev_dir>/autogen.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load(dev_dir: &Path) -> Result<Self> {
        let config_path = Self::config_file_path(dev_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Namespaces follow the game's resource location rules: non-empty,
    /// lowercase ASCII letters, digits, `_`, `-` and `.` only.
    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            anyhow::bail!("Namespace must not be empty");
        }

        if let Some(bad) = self
            .namespace
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
        {
            anyhow::bail!(
                "Invalid namespace '{}': character '{bad}' is not allowed",
                self.namespace
            );
        }

        Ok(())
    }

    /// Overrides the namespace, re-validating the result.
    pub fn set_namespace(&mut self, namespace: String) -> Result<()> {
        self.namespace = namespace;
        self.validate()
    }
}

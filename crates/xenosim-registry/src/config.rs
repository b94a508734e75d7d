//! Configuration loading for the registry.
//!
//! The only tunable is the authority identity gating simulation and
//! evolution mutations. It is injected at registry construction rather
//! than compared against a hardcoded constant, so embedders can supply
//! their own authority. The serde default keeps the source platform's
//! sentinel for compatibility.

use std::path::Path;

use serde::Deserialize;

use xenosim_types::Identity;

/// The source platform's distinguished authority identity.
///
/// Used as the default when no configuration overrides it.
pub const DEFAULT_AUTHORITY: &str = "CONTRACT_OWNER";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// The identity allowed to end simulations and set evolution results.
    #[serde(default = "default_authority")]
    pub authority: Identity,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            authority: default_authority(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

fn default_authority() -> Identity {
    Identity::from(DEFAULT_AUTHORITY)
}

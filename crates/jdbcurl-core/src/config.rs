//! # Configuration File Parser
//!
//! Reads `jdbcurl.toml`, the optional configuration file that sets CLI
//! defaults without repeating flags. Supports:
//!
//! - `[source]`: default URL and the environment variable to read it from
//! - `[output]`: default output format
//! - `[mask]`: extra secret key patterns and the replacement text
//!
//! Example `jdbcurl.toml`:
//!
//! ```toml
//! [source]
//! url = "jdbc:postgresql://localhost:5432/app"
//! env_var = "APP_JDBC_URL"
//!
//! [output]
//! format = "json"
//!
//! [mask]
//! extra_keys = ["sig", "sas"]
//! replacement = "<redacted>"
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mask::{Masker, DEFAULT_REPLACEMENT};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "jdbcurl.toml";

/// Environment variable consulted when no `[source] env_var` is set.
pub const DEFAULT_ENV_VAR: &str = "JDBC_URL";

/// Top-level jdbcurl.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub mask: MaskConfig,
}

/// Where the CLI looks for a URL when none is passed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Fallback URL.
    pub url: Option<String>,
    /// Environment variable holding the URL (defaults to `JDBC_URL`).
    pub env_var: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How parsed URLs are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Additional key fragments treated as secrets (case-insensitive).
    pub extra_keys: Vec<String>,
    /// Text that replaces secret values.
    pub replacement: String,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            extra_keys: Vec::new(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

/// Read and parse a jdbcurl.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be read, parsed or validated.
pub fn read_config(dir: &Path) -> Result<Option<Config>, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    config.validate()?;
    tracing::debug!("Loaded {}", path.display());

    Ok(Some(config))
}

impl Config {
    /// Validate semantic constraints that serde cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mask.replacement.is_empty() {
            return Err(ConfigError {
                message: "mask.replacement must not be empty. \
                          Remove the key to use the default."
                    .to_string(),
            });
        }
        if matches!(self.source.env_var.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ConfigError {
                message: "source.env_var must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Name of the environment variable to read a URL from.
    pub fn env_var(&self) -> &str {
        self.source.env_var.as_deref().unwrap_or(DEFAULT_ENV_VAR)
    }

    /// Non-blank `[mask] extra_keys` entries, trimmed.
    ///
    /// Blank entries are logged as a warning via `tracing::warn` and skipped.
    pub fn extra_secret_keys(&self) -> Vec<String> {
        self.mask
            .extra_keys
            .iter()
            .filter_map(|key| {
                let trimmed = key.trim();
                if trimmed.is_empty() {
                    tracing::warn!("Blank mask.extra_keys entry in {}. Ignoring.", CONFIG_FILE_NAME);
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect()
    }

    /// A masker built from the `[mask]` section.
    pub fn masker(&self) -> Result<Masker, ConfigError> {
        Masker::new(&self.extra_secret_keys(), self.mask.replacement.clone())
    }
}

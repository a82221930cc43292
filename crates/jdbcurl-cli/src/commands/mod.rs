pub mod check;
pub mod detect;
pub mod mask;
pub mod parse;

use std::path::Path;

use anyhow::{bail, Result};

use jdbcurl_core::config::{read_config, Config, CONFIG_FILE_NAME};

/// Settings shared by every command: the loaded config plus global flags.
#[derive(Debug, Default)]
pub struct Context {
    pub config: Config,
    pub env_override: Option<String>,
}

impl Context {
    /// Read jdbcurl.toml from the working directory, if present.
    pub fn load(env_override: Option<String>) -> Result<Self> {
        let config = read_config(Path::new("."))?.unwrap_or_default();
        Ok(Self {
            config,
            env_override,
        })
    }

    /// The environment variable consulted when no URL is given.
    pub fn env_var(&self) -> &str {
        self.env_override
            .as_deref()
            .unwrap_or_else(|| self.config.env_var())
    }

    /// Resolve the URL to work on: explicit argument, then the environment
    /// variable, then `[source] url` in the config file.
    pub fn resolve_url(&self, explicit: Option<&str>) -> Result<String> {
        resolve_url(explicit, |name| std::env::var(name).ok(), self)
    }
}

fn resolve_url(
    explicit: Option<&str>,
    lookup_env: impl Fn(&str) -> Option<String>,
    ctx: &Context,
) -> Result<String> {
    if let Some(url) = explicit {
        return Ok(url.to_string());
    }
    let env_var = ctx.env_var();
    if let Some(url) = lookup_env(env_var) {
        tracing::debug!("Using URL from ${}", env_var);
        return Ok(url);
    }
    if let Some(url) = &ctx.config.source.url {
        tracing::debug!("Using URL from {}", CONFIG_FILE_NAME);
        return Ok(url.clone());
    }
    bail!(
        "No JDBC URL given. Pass one as an argument, set ${}, or add [source] url to {}.",
        env_var,
        CONFIG_FILE_NAME,
    )
}

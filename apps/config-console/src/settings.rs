//! Console configuration: YAML file layered with `CONFIG_CONSOLE_*` env vars

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;

pub const ENV_PREFIX: &str = "CONFIG_CONSOLE_";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether console input runs with operator rights
    #[serde(default = "default_true")]
    pub operator: bool,

    /// Config manager module settings
    #[serde(default)]
    pub manager: config_manager::config::Config,
}

impl ConsoleConfig {
    /// Load from `path` (optional) and the environment
    ///
    /// Nested keys use `__` in env names, e.g.
    /// `CONFIG_CONSOLE_MANAGER__SETTINGS_FILE`.
    pub fn load(path: &Path) -> Result<Self> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("loading console configuration from {}", path.display()))
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

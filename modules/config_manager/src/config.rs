//! Configuration for the config manager module

use serde::Deserialize;
use std::path::PathBuf;

/// Config manager configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Location of the persisted settings document
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,

    /// Command label used in usage messages (`/<label> config ...`)
    #[serde(default = "default_command_label")]
    pub command_label: String,

    /// Write the bundled defaults when the settings file does not exist yet
    #[serde(default = "default_true")]
    pub write_defaults_if_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
            command_label: default_command_label(),
            write_defaults_if_missing: true,
        }
    }
}

fn default_settings_file() -> PathBuf {
    PathBuf::from("config.yml")
}

fn default_command_label() -> String {
    "elytraOnSpawn".to_string()
}

fn default_true() -> bool {
    true
}

//! YAML file implementation of the settings document

use super::BUNDLED_DEFAULTS;
use crate::domain::document::{SettingsDocument, SettingsTree};
use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Settings document persisted as a single YAML file
///
/// Saves go through a temporary file in the same directory followed by a
/// rename, so a failed save leaves the previous file untouched.
pub struct YamlFileDocument {
    path: PathBuf,
    defaults: String,
    tree: SettingsTree,
}

impl YamlFileDocument {
    /// Document at `path` using the bundled defaults
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_defaults(path, BUNDLED_DEFAULTS)
    }

    /// Document at `path` with custom default content
    pub fn with_defaults(path: impl Into<PathBuf>, defaults: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            defaults: defaults.into(),
            tree: SettingsTree::empty(),
        }
    }

    fn write_atomically(&self, contents: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temporary file in {}", dir.display()))?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl SettingsDocument for YamlFileDocument {
    fn get(&self, path: &str) -> Option<&Value> {
        self.tree.get(path)
    }

    fn set(&mut self, path: &str, value: Value) {
        self.tree.set(path, value);
    }

    fn keys(&self) -> Vec<String> {
        self.tree.keys()
    }

    fn tree(&self) -> Value {
        self.tree.root().clone()
    }

    fn save(&mut self) -> Result<()> {
        let rendered = self.tree.render()?;
        self.write_atomically(&rendered)
    }

    fn reload(&mut self) -> Result<()> {
        self.tree = match fs::read_to_string(&self.path) {
            Ok(text) => SettingsTree::parse(&text)
                .with_context(|| format!("parsing {}", self.path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Settings file not found, using an empty document");
                SettingsTree::empty()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        Ok(())
    }

    fn write_defaults_if_missing(&mut self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.write_atomically(&self.defaults)?;
        Ok(true)
    }

    fn restore_defaults(&mut self) -> Result<()> {
        let defaults = SettingsTree::parse(&self.defaults).context("parsing bundled defaults")?;
        self.write_atomically(&self.defaults)?;
        self.tree = defaults;
        tracing::info!(path = %self.path.display(), "Configuration restored to defaults");
        Ok(())
    }
}

//! Settings document seam
//!
//! The domain only talks to storage through [`SettingsDocument`].
//! Implementations are in infra/storage.

use super::path;
use anyhow::Result;
use serde_yaml::{Mapping, Value};

/// Live key/value tree addressed by dotted paths
pub trait SettingsDocument: Send {
    /// Value at `path`, if present
    fn get(&self, path: &str) -> Option<&Value>;

    /// Store `value` at `path` in memory
    fn set(&mut self, path: &str, value: Value);

    /// Whether `path` holds a value
    fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Every path, sections included, in document order
    fn keys(&self) -> Vec<String>;

    /// Copy of the whole tree
    fn tree(&self) -> Value;

    /// Persist the in-memory tree
    ///
    /// A failed save must leave the previously persisted content intact.
    fn save(&mut self) -> Result<()>;

    /// Replace the in-memory tree with the persisted one
    fn reload(&mut self) -> Result<()>;

    /// Persist the bundled defaults if nothing is persisted yet
    ///
    /// Returns whether defaults were written.
    fn write_defaults_if_missing(&mut self) -> Result<bool>;

    /// Overwrite the persisted document with the bundled defaults and load them
    fn restore_defaults(&mut self) -> Result<()>;
}

/// In-memory tree shared by document implementations
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsTree {
    root: Value,
}

impl SettingsTree {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn empty() -> Self {
        Self::new(Value::Mapping(Mapping::new()))
    }

    /// Parse YAML text; an empty document yields an empty tree
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(text)?;
        if root.is_null() {
            return Ok(Self::empty());
        }
        if !root.is_mapping() {
            anyhow::bail!("settings document must be a mapping at the top level");
        }
        Ok(Self::new(root))
    }

    pub fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        path::lookup(&self.root, key)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        path::assign(&mut self.root, key, value);
    }

    pub fn keys(&self) -> Vec<String> {
        path::deep_keys(&self.root)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl Default for SettingsTree {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_text() {
        let tree = SettingsTree::parse("").unwrap();
        assert!(tree.keys().is_empty());
    }

    #[test]
    fn test_parse_rejects_scalar_root() {
        assert!(SettingsTree::parse("just text").is_err());
    }

    #[test]
    fn test_render_roundtrip_keeps_types() {
        let mut tree = SettingsTree::empty();
        tree.set("spawnRadius", Value::from(12));
        tree.set("flyBoostMultiplier", Value::from(2.5));
        tree.set("particle", Value::Bool(true));

        let reparsed = SettingsTree::parse(&tree.render().unwrap()).unwrap();
        assert_eq!(reparsed.get("spawnRadius"), Some(&Value::from(12)));
        assert_eq!(reparsed.get("flyBoostMultiplier"), Some(&Value::from(2.5)));
        assert_eq!(reparsed.get("particle"), Some(&Value::Bool(true)));
    }
}

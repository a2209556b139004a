//! Storage adapters for the settings document

pub mod yaml_document;

pub use yaml_document::YamlFileDocument;

/// Default settings shipped with the crate
pub const BUNDLED_DEFAULTS: &str = include_str!("../../../defaults/config.yml");

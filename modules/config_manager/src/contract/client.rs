//! Native client trait for consumers of the validated configuration
//!
//! Consumers read through this trait and never mutate. They must not assume
//! a declared setting is present; the latest report says what was checked.

use super::model::{ConfigSnapshot, ValidationReport};
use serde_yaml::Value;
use std::sync::Arc;

/// Read-only configuration API for in-process consumers
pub trait ConfigApi: Send + Sync {
    /// Case-insensitive lookup by full dotted path
    fn get_value(&self, key: &str) -> Option<Value>;

    /// Report from the most recent validation pass
    fn latest_report(&self) -> Option<ValidationReport>;

    /// Whole published snapshot
    fn snapshot(&self) -> Arc<ConfigSnapshot>;
}

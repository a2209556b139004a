//! Config Manager Module
//!
//! Runtime configuration management for a hosted component. A YAML settings
//! document is validated against a static schema, exposed read-only to
//! consumers, and mutated by operators through a small command surface that
//! persists every change and drives a disable/enable cycle on reset or reload.

// Public exports
pub mod contract;
pub use contract::{
    client::ConfigApi, error::ConfigError, AppliedSetting, AuthContext, CommandResponse,
    ConfigSnapshot, LifecycleOutcome, RestartReport, SettingKind, ValidationEntry, ValidationReport,
    ValidationStatus, WriteKind,
};

pub mod module;
pub use module::ConfigManagerModule;

pub mod config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

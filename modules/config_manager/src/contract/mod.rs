//! Contract layer - public API for consumers of the validated configuration
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::ConfigApi;
pub use error::ConfigError;
pub use model::{
    AppliedSetting, AuthContext, CommandResponse, ConfigSnapshot, LifecycleOutcome, RestartReport,
    SettingKind, ValidationEntry, ValidationReport, ValidationStatus, WriteKind,
};

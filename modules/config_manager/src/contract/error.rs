//! Contract error types for the config manager
//!
//! Each failure class keeps its own variant; command handlers and tests rely
//! on telling coercion, permission and I/O failures apart.

use thiserror::Error;

/// Config manager domain errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Declared setting absent from the document
    #[error("Missing configuration: {key}")]
    MissingSetting { key: String },

    /// Declared setting present with the wrong shape
    #[error("Invalid configuration for {key}: {diagnostic}")]
    InvalidSetting { key: String, diagnostic: String },

    /// Key has no write category
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    /// Operator input could not be converted to the key's type
    #[error("Invalid value '{value}' for '{key}': expected {expected}")]
    Coercion {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Parsed value lies outside the accepted range
    #[error("Value must be {min} or higher.")]
    Range { key: String, value: f64, min: f64 },

    /// Saving or re-reading the document failed
    ///
    /// `stale` is set when memory holds a value the persisted file lacks.
    #[error("Error saving configuration: {message}")]
    Persistence {
        key: Option<String>,
        message: String,
        stale: bool,
    },

    /// The disable/enable cycle could not be completed
    #[error("Restart failed: {reason}")]
    LifecycleFatal { reason: String },

    /// Caller lacks operator rights
    #[error("You don't have the permission to do that.")]
    Unauthorized,

    /// Malformed command
    #[error("{message}")]
    Usage { message: String },
}

impl ConfigError {
    /// True for failures that leave all state unchanged
    pub fn is_caller_local(&self) -> bool {
        matches!(
            self,
            Self::UnknownKey { .. }
                | Self::Coercion { .. }
                | Self::Range { .. }
                | Self::Unauthorized
                | Self::Usage { .. }
        )
    }
}

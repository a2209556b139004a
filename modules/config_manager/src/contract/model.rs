//! Contract models for the config manager
//!
//! Setting values are carried as `serde_yaml::Value` so the document's own
//! scalar types (bool, number, string) survive validation and mutation.

use crate::contract::ConfigError;
use crate::domain::path;
use serde_yaml::Value;

/// Expected kind of a declared setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Boolean,
    Number,
    /// A number strictly greater than zero
    PositiveNumber,
    String,
}

impl SettingKind {
    /// Diagnostic attached to values that fail this kind
    pub fn message(self) -> &'static str {
        match self {
            Self::Boolean => "should be true or false",
            Self::Number => "should be a number",
            Self::PositiveNumber => "should be a positive number",
            Self::String => "should be a string",
        }
    }

    /// Whether `value` satisfies this kind
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Boolean => value.is_bool(),
            Self::Number => value.is_number(),
            Self::PositiveNumber => value.as_f64().is_some_and(|n| n > 0.0),
            Self::String => value.is_string(),
        }
    }
}

/// How operator input for a key is coerced before it is written
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteKind {
    /// `"true"` (any case) is true, everything else is false
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// Finite floating point value no lower than `min`
    Float { min: f64 },
    /// Stored verbatim
    Text,
}

impl WriteKind {
    /// Human-readable name of the expected input, used in coercion errors
    pub fn expected(self) -> &'static str {
        match self {
            Self::Boolean => "true or false",
            Self::Integer => "a whole number",
            Self::Float { .. } => "a decimal number",
            Self::Text => "text",
        }
    }
}

/// Outcome of checking one registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Valid,
    Missing,
    Invalid,
}

/// Validation result for a single setting
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEntry {
    /// Registry key
    pub key: String,
    /// Outcome for this key
    pub status: ValidationStatus,
    /// Value found in the document, if any
    pub value: Option<Value>,
    /// Diagnostic of the violated kind (invalid entries only)
    pub diagnostic: Option<String>,
}

/// Structured outcome of one validation pass
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Entries in registry order
    pub entries: Vec<ValidationEntry>,
    /// Verbosity read from the document for this pass
    pub verbose: bool,
}

impl ValidationReport {
    /// Keys that are missing or invalid, in registry order
    pub fn problem_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.status != ValidationStatus::Valid)
            .map(|e| e.key.as_str())
            .collect()
    }

    /// True when every registry key is present and valid
    pub fn is_clean(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.status == ValidationStatus::Valid)
    }

    pub fn entry(&self, key: &str) -> Option<&ValidationEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn status_of(&self, key: &str) -> Option<ValidationStatus> {
        self.entry(key).map(|e| e.status)
    }

    /// Problems expressed as domain errors
    pub fn problems(&self) -> Vec<ConfigError> {
        self.entries
            .iter()
            .filter_map(|e| match e.status {
                ValidationStatus::Valid => None,
                ValidationStatus::Missing => Some(ConfigError::MissingSetting {
                    key: e.key.clone(),
                }),
                ValidationStatus::Invalid => Some(ConfigError::InvalidSetting {
                    key: e.key.clone(),
                    diagnostic: e.diagnostic.clone().unwrap_or_default(),
                }),
            })
            .collect()
    }
}

/// A write applied by the mutation engine
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedSetting {
    /// Path the value was stored under
    pub key: String,
    /// Coerced value
    pub value: Value,
    /// Operator input the value was coerced from
    pub raw: String,
}

/// Result of one disable/enable cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOutcome {
    Restarted,
    Fatal { reason: String },
}

impl LifecycleOutcome {
    pub fn is_restarted(&self) -> bool {
        matches!(self, Self::Restarted)
    }
}

/// What happened during a `reset` or `reload`
///
/// The restart is attempted even when preparing the document failed, so both
/// halves are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct RestartReport {
    /// Failure while restoring or re-reading the document
    pub persistence_error: Option<ConfigError>,
    /// Result of the disable/enable cycle
    pub outcome: LifecycleOutcome,
}

impl RestartReport {
    pub fn is_success(&self) -> bool {
        self.persistence_error.is_none() && self.outcome.is_restarted()
    }
}

/// Single human-readable reply to an operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    pub success: bool,
    pub message: String,
}

impl CommandResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Caller identity for command authorization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthContext {
    /// Whether the caller may inspect and change settings
    pub is_operator: bool,
    /// Optional caller name for audit logging
    pub name: Option<String>,
}

impl AuthContext {
    /// Create a context without operator rights
    pub fn non_operator() -> Self {
        Self::default()
    }

    /// Create an operator context
    pub fn operator(name: Option<String>) -> Self {
        Self {
            is_operator: true,
            name,
        }
    }

    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }
}

/// Read-only view of the configuration handed to consumers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigSnapshot {
    /// Document tree at publication time
    pub tree: Value,
    /// Latest validation report, if a pass has run
    pub report: Option<ValidationReport>,
}

impl ConfigSnapshot {
    /// Case-insensitive lookup by full dotted path
    pub fn get_value(&self, key: &str) -> Option<Value> {
        let resolved = path::resolve_case_insensitive(&self.tree, key);
        path::lookup(&self.tree, &resolved).cloned()
    }
}

//! Schema validation for the settings document
//!
//! A pass never fails. Missing or invalid settings leave the component in a
//! degraded state that is logged and returned in the report.

use super::document::SettingsDocument;
use super::schema;
use crate::contract::{ValidationEntry, ValidationReport, ValidationStatus};

/// Key of the verbosity switch inside the document
pub const VERBOSE_KEY: &str = "verbose";

/// Verbosity configured by the document, `true` when absent or not a boolean
pub fn read_verbose(document: &dyn SettingsDocument) -> bool {
    document
        .get(VERBOSE_KEY)
        .and_then(|v| v.as_bool())
        .unwrap_or(true)
}

/// Check every registry key against `document`
pub fn validate(document: &dyn SettingsDocument) -> ValidationReport {
    let verbose = read_verbose(document);
    tracing::info!("Verbose mode: {}", verbose);

    let mut entries = Vec::with_capacity(schema::registry().len());
    for &(key, kind) in schema::registry() {
        let Some(value) = document.get(key) else {
            if verbose {
                tracing::error!("Missing configuration: {}", key);
            }
            entries.push(ValidationEntry {
                key: key.to_string(),
                status: ValidationStatus::Missing,
                value: None,
                diagnostic: None,
            });
            continue;
        };

        if kind.accepts(value) {
            if verbose {
                tracing::info!("Config found and valid: {} = {}", key, display_value(value));
            }
            entries.push(ValidationEntry {
                key: key.to_string(),
                status: ValidationStatus::Valid,
                value: Some(value.clone()),
                diagnostic: None,
            });
        } else {
            tracing::error!("Invalid configuration for {}: {}", key, kind.message());
            entries.push(ValidationEntry {
                key: key.to_string(),
                status: ValidationStatus::Invalid,
                value: Some(value.clone()),
                diagnostic: Some(kind.message().to_string()),
            });
        }
    }

    let report = ValidationReport { entries, verbose };
    let problems = report.problem_keys();
    if problems.is_empty() {
        tracing::info!("All configurations are present and valid.");
    } else {
        tracing::warn!("Invalid or missing configurations: {}", problems.join(", "));
        tracing::warn!("Plugin may not function correctly.");
    }
    report
}

/// Scalar rendering used in logs and operator messages
pub fn display_value(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

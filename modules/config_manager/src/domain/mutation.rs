//! Operator-driven setting mutation
//!
//! Write categories are keyed by lower-cased name and are independent of the
//! validation schema. A value is only written after it has been coerced to
//! its category's type; the order within one mutation is write, save, reload.

use super::document::SettingsDocument;
use super::path;
use super::validation::display_value;
use crate::contract::{AppliedSetting, ConfigError, WriteKind};
use serde_yaml::Value;

/// Lowest accepted value for multiplier settings
pub const MULTIPLIER_MIN: f64 = 1.0;

/// Write category of `key`, matched ignoring case
pub fn write_kind_for(key: &str) -> Option<WriteKind> {
    match key.to_lowercase().as_str() {
        "verbose" | "boostsound" | "switchgamemodecancelsound" | "particle" => {
            Some(WriteKind::Boolean)
        }
        "spawnradius"
        | "boostsoundvolume"
        | "boostsoundpitch"
        | "switchgamemodecancelsoundvolume"
        | "switchgamemodecancelsoundpitch" => Some(WriteKind::Integer),
        "flyboostmultiplier" | "startsoundboost" => Some(WriteKind::Float {
            min: MULTIPLIER_MIN,
        }),
        "world" => Some(WriteKind::Text),
        _ => None,
    }
}

/// Convert operator text into a value of `kind`
pub fn coerce(key: &str, kind: WriteKind, raw: &str) -> Result<Value, ConfigError> {
    let mismatch = || ConfigError::Coercion {
        key: key.to_string(),
        value: raw.to_string(),
        expected: kind.expected(),
    };

    match kind {
        WriteKind::Boolean => Ok(Value::Bool(raw.eq_ignore_ascii_case("true"))),
        WriteKind::Integer => raw
            .parse::<i32>()
            .map(Value::from)
            .map_err(|_| mismatch()),
        WriteKind::Float { min } => {
            let parsed = raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(mismatch)?;
            if parsed < min {
                return Err(ConfigError::Range {
                    key: key.to_string(),
                    value: parsed,
                    min,
                });
            }
            Ok(Value::from(parsed))
        }
        WriteKind::Text => Ok(Value::String(raw.to_string())),
    }
}

/// Stored path matching `raw_key` ignoring case, or `raw_key` for new keys
pub fn resolve_key(document: &dyn SettingsDocument, raw_key: &str) -> String {
    path::resolve_among(document.keys(), raw_key)
}

/// Case-insensitive read
pub fn get_by_name(document: &dyn SettingsDocument, raw_key: &str) -> Option<Value> {
    let key = resolve_key(document, raw_key);
    document.get(&key).cloned()
}

/// Coerce, write, persist and reload one setting
///
/// Unknown keys and failed coercions return before the document is touched.
/// A failed save keeps the in-memory write and reports it as stale.
pub fn set_by_name(
    document: &mut dyn SettingsDocument,
    raw_key: &str,
    raw_value: &str,
) -> Result<AppliedSetting, ConfigError> {
    let kind = write_kind_for(raw_key).ok_or_else(|| ConfigError::UnknownKey {
        key: raw_key.to_string(),
    })?;
    let value = coerce(raw_key, kind, raw_value)?;

    let key = resolve_key(document, raw_key);
    document.set(&key, value.clone());

    if let Err(e) = document.save() {
        tracing::error!(
            key = %key,
            error = %e,
            "Failed to save configuration; the in-memory value is newer than the file"
        );
        return Err(ConfigError::Persistence {
            key: Some(key),
            message: e.to_string(),
            stale: true,
        });
    }

    if let Err(e) = document.reload() {
        tracing::error!(key = %key, error = %e, "Saved configuration could not be re-read");
        return Err(ConfigError::Persistence {
            key: Some(key),
            message: e.to_string(),
            stale: false,
        });
    }

    tracing::info!(key = %key, value = %display_value(&value), "Configuration updated");
    Ok(AppliedSetting {
        key,
        value,
        raw: raw_value.to_string(),
    })
}

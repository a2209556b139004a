//! Mapping of domain errors to operator responses

use crate::contract::{CommandResponse, ConfigError};

/// Operator-facing text for an error
pub fn message_for(err: &ConfigError) -> String {
    match err {
        ConfigError::Persistence { stale: true, .. } => format!(
            "{}. The running configuration now differs from the file on disk; \
             retry the change or run 'config reload'.",
            err
        ),
        ConfigError::LifecycleFatal { .. } => format!(
            "{}. The plugin may be disabled; check the server console.",
            err
        ),
        other => other.to_string(),
    }
}

impl From<ConfigError> for CommandResponse {
    fn from(err: ConfigError) -> Self {
        CommandResponse::fail(message_for(&err))
    }
}

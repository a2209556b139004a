//! Command handlers - route parsed commands to the domain service

use super::parser::{self, ConfigCommand};
use super::error::message_for;
use crate::contract::{AuthContext, CommandResponse, ConfigError, LifecycleOutcome, RestartReport};
use crate::domain::validation::display_value;
use crate::domain::Service;
use std::sync::Arc;

pub const CHECK_REPLY: &str = "Please check your server console";

/// Entry point for operator commands
///
/// Single-shot: nothing is remembered between invocations.
#[derive(Clone)]
pub struct CommandHandler {
    service: Arc<Service>,
    label: String,
}

impl CommandHandler {
    pub fn new(service: Arc<Service>, label: impl Into<String>) -> Self {
        Self {
            service,
            label: label.into(),
        }
    }

    /// Authorize, parse and execute one command
    pub fn handle<S: AsRef<str>>(&self, auth: &AuthContext, args: &[S]) -> CommandResponse {
        if !auth.is_operator {
            tracing::warn!(caller = auth.display_name(), "Rejected config command from non-operator");
            return ConfigError::Unauthorized.into();
        }

        let command = match parser::parse(args, &self.label) {
            Ok(command) => command,
            Err(e) => return e.into(),
        };
        tracing::info!(caller = auth.display_name(), ?command, "Config command");

        match command {
            ConfigCommand::Reset => {
                restart_response("Configuration reset to defaults", self.service.reset())
            }
            ConfigCommand::Reload => {
                restart_response("Configuration reloaded", self.service.reload())
            }
            ConfigCommand::Check => {
                // Diagnostics go to the log only.
                let report = self.service.check();
                for problem in report.problems() {
                    tracing::debug!(caller = auth.display_name(), %problem, "Config check problem");
                }
                CommandResponse::ok(CHECK_REPLY)
            }
            ConfigCommand::Get { key } => match self.service.get_setting(&key) {
                Some(value) => CommandResponse::ok(format!(
                    "Current value of '{}': {}",
                    key,
                    display_value(&value)
                )),
                None => CommandResponse::fail(format!("Configuration key '{}' not found.", key)),
            },
            ConfigCommand::Set { key, value } => match self.service.set_setting(&key, &value) {
                Ok(applied) => CommandResponse::ok(format!(
                    "Configuration updated: {} = {}",
                    applied.key,
                    display_value(&applied.value)
                )),
                Err(e) => e.into(),
            },
        }
    }
}

fn restart_response(action: &str, report: RestartReport) -> CommandResponse {
    if report.is_success() {
        return CommandResponse::ok(format!("{} and plugin restarted.", action));
    }

    let mut parts = Vec::new();
    if let Some(err) = &report.persistence_error {
        parts.push(message_for(err));
    }
    match report.outcome {
        LifecycleOutcome::Restarted => parts.push("Plugin restarted.".to_string()),
        LifecycleOutcome::Fatal { reason } => {
            parts.push(message_for(&ConfigError::LifecycleFatal { reason }))
        }
    }
    CommandResponse::fail(parts.join(" "))
}

//! Module declaration and wiring

use crate::api::command::CommandHandler;
use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::{AuthContext, CommandResponse, ConfigApi, ValidationReport};
use crate::domain::{Host, LifecycleController, Service, SettingsDocument};
use crate::infra::storage::YamlFileDocument;
use std::sync::Arc;

/// Config manager module
///
/// Owns the domain service and hands out the operator command handler and
/// the read-only consumer client.
pub struct ConfigManagerModule {
    config: Config,
    service: Arc<Service>,
    commands: CommandHandler,
}

impl ConfigManagerModule {
    /// Build the module over the YAML file named in `config`
    pub fn new(config: Config, host: Arc<dyn Host>) -> Self {
        let document = Box::new(YamlFileDocument::new(config.settings_file.clone()));
        Self::with_document(config, document, host)
    }

    /// Build the module over an arbitrary document implementation
    pub fn with_document(
        config: Config,
        document: Box<dyn SettingsDocument>,
        host: Arc<dyn Host>,
    ) -> Self {
        let lifecycle = LifecycleController::new(host);
        let service = Arc::new(Service::new(
            document,
            lifecycle,
            config.write_defaults_if_missing,
        ));
        let commands = CommandHandler::new(service.clone(), config.command_label.clone());

        Self {
            config,
            service,
            commands,
        }
    }

    /// Load, validate and publish the configuration
    pub fn start(&self) -> ValidationReport {
        tracing::info!(
            settings_file = %self.config.settings_file.display(),
            "Config manager is starting..."
        );
        let report = self.service.enable();
        tracing::info!("Config manager is now fully operational!");
        report
    }

    /// Run an operator command
    pub fn handle_command<S: AsRef<str>>(&self, auth: &AuthContext, args: &[S]) -> CommandResponse {
        self.commands.handle(auth, args)
    }

    /// Read-only client for in-process consumers
    pub fn client(&self) -> Arc<dyn ConfigApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

//! Domain service - configuration orchestration

use super::document::SettingsDocument;
use super::lifecycle::LifecycleController;
use super::{mutation, validation};
use crate::contract::{
    AppliedSetting, ConfigError, ConfigSnapshot, LifecycleOutcome, RestartReport,
    ValidationReport,
};
use parking_lot::{Mutex, RwLock};
use serde_yaml::Value;
use std::sync::Arc;

/// Domain service for configuration management
///
/// All document access goes through one mutex. The document lock is never
/// held across host calls.
pub struct Service {
    document: Mutex<Box<dyn SettingsDocument>>,
    lifecycle: LifecycleController,
    /// Last published consumer view
    snapshot: RwLock<Arc<ConfigSnapshot>>,
    write_defaults_if_missing: bool,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        document: Box<dyn SettingsDocument>,
        lifecycle: LifecycleController,
        write_defaults_if_missing: bool,
    ) -> Self {
        Self {
            document: Mutex::new(document),
            lifecycle,
            snapshot: RwLock::new(Arc::new(ConfigSnapshot::default())),
            write_defaults_if_missing,
        }
    }

    // ===== Lifecycle =====

    /// Load the document, validate it and publish the result
    ///
    /// Load failures are logged; validation then runs on whatever is in
    /// memory so the component still comes up in a degraded state.
    pub fn enable(&self) -> ValidationReport {
        tracing::info!("Loading config...");
        let report = {
            let mut document = self.document.lock();
            if self.write_defaults_if_missing {
                match document.write_defaults_if_missing() {
                    Ok(true) => tracing::info!("Default configuration written."),
                    Ok(false) => {}
                    Err(e) => tracing::warn!(error = %e, "Could not write default configuration"),
                }
            }
            match document.reload() {
                Ok(()) => tracing::info!("Config loaded successfully."),
                Err(e) => tracing::error!(
                    error = %e,
                    "Failed to load configuration; continuing with in-memory values"
                ),
            }

            tracing::info!("Performing config check...");
            let report = validation::validate(&**document);
            tracing::info!("Config check completed.");
            report
        };
        self.publish(Some(report.clone()));
        report
    }

    /// Overwrite the persisted document with bundled defaults, then restart
    pub fn reset(&self) -> RestartReport {
        let persistence_error = {
            let mut document = self.document.lock();
            document.restore_defaults().err().map(|e| {
                tracing::error!(error = %e, "Could not restore default configuration");
                ConfigError::Persistence {
                    key: None,
                    message: e.to_string(),
                    stale: false,
                }
            })
        };
        self.restart_after(persistence_error)
    }

    /// Re-read the persisted document, then restart
    pub fn reload(&self) -> RestartReport {
        let persistence_error = {
            let mut document = self.document.lock();
            document.reload().err().map(|e| {
                tracing::error!(error = %e, "Could not re-read configuration");
                ConfigError::Persistence {
                    key: None,
                    message: e.to_string(),
                    stale: false,
                }
            })
        };
        self.restart_after(persistence_error)
    }

    fn restart_after(&self, persistence_error: Option<ConfigError>) -> RestartReport {
        let outcome = self.lifecycle.restart();
        match &outcome {
            LifecycleOutcome::Restarted => {
                self.enable();
            }
            LifecycleOutcome::Fatal { reason } => {
                tracing::error!(
                    reason = %reason,
                    "Component could not be re-enabled and may be left disabled; operator action required"
                );
            }
        }
        RestartReport {
            persistence_error,
            outcome,
        }
    }

    // ===== Validation =====

    /// Run a validation pass and record it in the published snapshot
    pub fn check(&self) -> ValidationReport {
        let report = validation::validate(&**self.document.lock());
        self.publish(Some(report.clone()));
        report
    }

    /// Verbosity seen by the latest validation pass, or the document's own
    /// value if no pass has run yet
    pub fn is_verbose(&self) -> bool {
        match self.latest_report() {
            Some(report) => report.verbose,
            None => validation::read_verbose(&**self.document.lock()),
        }
    }

    // ===== Setting Operations =====

    /// Case-insensitive read from the live document
    pub fn get_setting(&self, raw_key: &str) -> Option<Value> {
        mutation::get_by_name(&**self.document.lock(), raw_key)
    }

    /// Coerce and persist one setting, then publish the new value
    ///
    /// A persistence failure still publishes, since the write has already
    /// reached the live document.
    pub fn set_setting(
        &self,
        raw_key: &str,
        raw_value: &str,
    ) -> Result<AppliedSetting, ConfigError> {
        let result = {
            let mut document = self.document.lock();
            mutation::set_by_name(&mut **document, raw_key, raw_value)
        };
        if matches!(result, Ok(_) | Err(ConfigError::Persistence { .. })) {
            self.refresh_snapshot();
        }
        result
    }

    // ===== Consumer View =====

    pub fn snapshot(&self) -> Arc<ConfigSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn latest_report(&self) -> Option<ValidationReport> {
        self.snapshot.read().report.clone()
    }

    /// Publish the current document, keeping the latest report
    pub fn refresh_snapshot(&self) {
        let report = self.latest_report();
        self.publish(report);
    }

    pub fn lifecycle(&self) -> &LifecycleController {
        &self.lifecycle
    }

    fn publish(&self, report: Option<ValidationReport>) {
        let tree = self.document.lock().tree();
        *self.snapshot.write() = Arc::new(ConfigSnapshot { tree, report });
    }
}

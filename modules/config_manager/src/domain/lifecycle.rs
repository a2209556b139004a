//! Disable/enable cycle over the hosting process

use crate::contract::LifecycleOutcome;
use anyhow::Result;
use std::sync::Arc;

/// Hosting process that owns enable/disable of the managed component
pub trait Host: Send + Sync {
    /// Stop the component's active behavior
    fn disable(&self);

    /// Start the component again
    fn enable(&self) -> Result<()>;

    /// Whether the component is currently active
    fn is_enabled(&self) -> bool;
}

/// Runs restarts against a [`Host`]
///
/// Any in-flight state tied to the disabled phase is lost, so callers only
/// restart once pending persistence has returned.
#[derive(Clone)]
pub struct LifecycleController {
    host: Arc<dyn Host>,
}

impl LifecycleController {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    /// Disable, then try to enable again
    ///
    /// Never propagates a host fault; every path ends in an outcome.
    pub fn restart(&self) -> LifecycleOutcome {
        tracing::info!("trying to restart the plugin..");
        self.host.disable();

        match self.host.enable() {
            Ok(()) if self.host.is_enabled() => {
                tracing::info!("Plugin restarted success");
                LifecycleOutcome::Restarted
            }
            Ok(()) => {
                tracing::error!("cannot start plugin");
                LifecycleOutcome::Fatal {
                    reason: "cannot start".to_string(),
                }
            }
            Err(e) => {
                tracing::error!(error = ?e, "Something went wrong: {}", e);
                LifecycleOutcome::Fatal {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.host.is_enabled()
    }
}

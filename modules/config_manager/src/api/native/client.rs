//! Native client implementation - wraps the domain service for consumers

use crate::contract::{ConfigApi, ConfigSnapshot, ValidationReport};
use crate::domain::Service;
use serde_yaml::Value;
use std::sync::Arc;

/// Read-only client over the published snapshot
///
/// Reads never touch the live document, so consumers only see values that
/// were published after start, a mutation, or a restart.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl ConfigApi for NativeClient {
    fn get_value(&self, key: &str) -> Option<Value> {
        self.service.snapshot().get_value(key)
    }

    fn latest_report(&self) -> Option<ValidationReport> {
        self.service.latest_report()
    }

    fn snapshot(&self) -> Arc<ConfigSnapshot> {
        self.service.snapshot()
    }
}

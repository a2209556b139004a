//! In-process host: the console itself owns the enable flag

use config_manager::domain::Host;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct ConsoleHost {
    enabled: AtomicBool,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
        }
    }
}

impl Default for ConsoleHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for ConsoleHost {
    fn disable(&self) {
        tracing::info!("Disabling managed component");
        self.enabled.store(false, Ordering::SeqCst);
    }

    fn enable(&self) -> anyhow::Result<()> {
        tracing::info!("Enabling managed component");
        self.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disable_then_enable() {
        let host = ConsoleHost::new();
        assert!(host.is_enabled());
        host.disable();
        assert!(!host.is_enabled());
        host.enable().unwrap();
        assert!(host.is_enabled());
    }
}

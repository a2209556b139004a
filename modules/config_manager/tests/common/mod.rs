//! Common test utilities: in-memory document and scriptable host
#![allow(dead_code)]

use config_manager::domain::{Host, SettingsDocument, SettingsTree};
use config_manager::infra::storage::BUNDLED_DEFAULTS;
use parking_lot::Mutex;
use serde_yaml::Value;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Every declared setting with a valid value
pub const VALID_YAML: &str = "\
verbose: true
spawnRadius: 50
flyBoostMultiplier: 3
startBoostMultiplier: 2.5
world: world
boostSoundSetter: true
boostSound: ENTITY_FIREWORK_ROCKET_LAUNCH
boostSoundPitch: 1
switchGamemodeCancelSoundSetter: false
switchGamemodeCancelSound: BLOCK_NOTE_BLOCK_BASS
particle: true
";

// ===== Logs =====

/// Formatted log output collected by [`capture_logs`]
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buffer.lock())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Lines emitted at `level` (`"ERROR"`, `"WARN"`, `"INFO"`, ...)
    pub fn at(&self, level: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.trim_start().starts_with(level))
            .collect()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines().iter().filter(|l| l.contains(needle)).count()
    }

    /// Whether `needle` was logged at `level`
    pub fn has(&self, level: &str, needle: &str) -> bool {
        self.at(level).iter().any(|l| l.contains(needle))
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records every event as plain text
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogCapture) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}

// ===== Document =====

#[derive(Default)]
struct StoreState {
    persisted: Option<SettingsTree>,
    fail_save: bool,
    fail_reload: bool,
    fail_restore: bool,
    saves: usize,
    reloads: usize,
    restores: usize,
}

/// Stand-in for the file behind a [`MemoryDocument`]
///
/// Shared with the test so persisted state and call counts stay visible after
/// the document is boxed into a service.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn persisted(&self) -> Option<SettingsTree> {
        self.state.lock().persisted.clone()
    }

    pub fn persisted_value(&self, key: &str) -> Option<Value> {
        self.state
            .lock()
            .persisted
            .as_ref()
            .and_then(|t| t.get(key).cloned())
    }

    /// Simulate an external edit of the file
    pub fn write_external(&self, yaml: &str) {
        self.state.lock().persisted = Some(SettingsTree::parse(yaml).unwrap());
    }

    pub fn fail_save(&self, fail: bool) {
        self.state.lock().fail_save = fail;
    }

    pub fn fail_reload(&self, fail: bool) {
        self.state.lock().fail_reload = fail;
    }

    pub fn fail_restore(&self, fail: bool) {
        self.state.lock().fail_restore = fail;
    }

    pub fn saves(&self) -> usize {
        self.state.lock().saves
    }

    pub fn reloads(&self) -> usize {
        self.state.lock().reloads
    }

    pub fn restores(&self) -> usize {
        self.state.lock().restores
    }
}

/// In-memory settings document with failure injection
pub struct MemoryDocument {
    live: SettingsTree,
    store: Arc<MemoryStore>,
}

impl MemoryDocument {
    /// Document whose file and memory both hold `yaml`
    pub fn from_yaml(yaml: &str) -> (Self, Arc<MemoryStore>) {
        let tree = SettingsTree::parse(yaml).unwrap();
        let store = Arc::new(MemoryStore::default());
        store.state.lock().persisted = Some(tree.clone());
        (
            Self {
                live: tree,
                store: store.clone(),
            },
            store,
        )
    }

    /// Document with no file behind it yet
    pub fn without_file() -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (
            Self {
                live: SettingsTree::empty(),
                store: store.clone(),
            },
            store,
        )
    }
}

impl SettingsDocument for MemoryDocument {
    fn get(&self, path: &str) -> Option<&Value> {
        self.live.get(path)
    }

    fn set(&mut self, path: &str, value: Value) {
        self.live.set(path, value);
    }

    fn keys(&self) -> Vec<String> {
        self.live.keys()
    }

    fn tree(&self) -> Value {
        self.live.root().clone()
    }

    fn save(&mut self) -> anyhow::Result<()> {
        let mut state = self.store.state.lock();
        state.saves += 1;
        if state.fail_save {
            anyhow::bail!("disk full");
        }
        // Round-trip through text so reads see the persisted form.
        let text = self.live.render()?;
        state.persisted = Some(SettingsTree::parse(&text)?);
        Ok(())
    }

    fn reload(&mut self) -> anyhow::Result<()> {
        let mut state = self.store.state.lock();
        state.reloads += 1;
        if state.fail_reload {
            anyhow::bail!("permission denied");
        }
        self.live = state.persisted.clone().unwrap_or_default();
        Ok(())
    }

    fn write_defaults_if_missing(&mut self) -> anyhow::Result<bool> {
        let mut state = self.store.state.lock();
        if state.persisted.is_some() {
            return Ok(false);
        }
        state.persisted = Some(SettingsTree::parse(BUNDLED_DEFAULTS)?);
        Ok(true)
    }

    fn restore_defaults(&mut self) -> anyhow::Result<()> {
        let mut state = self.store.state.lock();
        state.restores += 1;
        if state.fail_restore {
            anyhow::bail!("read-only file system");
        }
        let defaults = SettingsTree::parse(BUNDLED_DEFAULTS)?;
        state.persisted = Some(defaults.clone());
        self.live = defaults;
        Ok(())
    }
}

// ===== Host =====

/// How the host reacts to `enable`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostBehavior {
    Healthy,
    /// `enable` returns normally but the component stays inactive
    StaysDisabled,
    /// `enable` fails with the given message
    Fails(String),
}

/// Host that records every call
pub struct TestHost {
    enabled: AtomicBool,
    behavior: Mutex<HostBehavior>,
    calls: Mutex<Vec<&'static str>>,
}

impl TestHost {
    pub fn new(behavior: HostBehavior) -> Arc<Self> {
        Arc::new(Self {
            enabled: AtomicBool::new(true),
            behavior: Mutex::new(behavior),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn healthy() -> Arc<Self> {
        Self::new(HostBehavior::Healthy)
    }

    pub fn set_behavior(&self, behavior: HostBehavior) {
        *self.behavior.lock() = behavior;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }
}

impl Host for TestHost {
    fn disable(&self) {
        self.calls.lock().push("disable");
        self.enabled.store(false, Ordering::SeqCst);
    }

    fn enable(&self) -> anyhow::Result<()> {
        self.calls.lock().push("enable");
        match self.behavior.lock().clone() {
            HostBehavior::Healthy => {
                self.enabled.store(true, Ordering::SeqCst);
                Ok(())
            }
            HostBehavior::StaysDisabled => Ok(()),
            HostBehavior::Fails(message) => Err(anyhow::anyhow!(message)),
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

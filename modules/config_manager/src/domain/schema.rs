//! Static schema of declared settings
//!
//! Keys here are matched exactly by the validator. The table never changes
//! at runtime.

use crate::contract::SettingKind;

const REGISTRY: &[(&str, SettingKind)] = &[
    ("spawnRadius", SettingKind::Number),
    ("flyBoostMultiplier", SettingKind::PositiveNumber),
    ("startBoostMultiplier", SettingKind::PositiveNumber),
    ("world", SettingKind::String),
    ("boostSoundSetter", SettingKind::Boolean),
    ("boostSound", SettingKind::String),
    ("switchGamemodeCancelSoundSetter", SettingKind::Boolean),
    ("switchGamemodeCancelSound", SettingKind::String),
    ("particle", SettingKind::Boolean),
];

/// Declared settings in check order
pub fn registry() -> &'static [(&'static str, SettingKind)] {
    REGISTRY
}

//! Domain layer - validation, mutation and lifecycle logic

pub mod document;
pub mod lifecycle;
pub mod mutation;
pub mod path;
pub mod schema;
pub mod service;
pub mod validation;

pub use document::{SettingsDocument, SettingsTree};
pub use lifecycle::{Host, LifecycleController};
pub use service::Service;

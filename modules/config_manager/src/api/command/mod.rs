//! Operator command surface: `<label> config <key> [value]` and
//! `<label> config <reset|reload|check>`

pub mod error;
pub mod handlers;
pub mod parser;

pub use handlers::CommandHandler;
pub use parser::ConfigCommand;

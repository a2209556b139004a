//! API layer - operator command surface and in-process consumer client

pub mod command;
pub mod native;

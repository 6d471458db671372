//! Tern command-line driver.
//!
//! The binary in `main.rs` only dispatches on the command name; the work
//! lives here so it can be tested.

pub mod commands;
pub mod tracing_setup;

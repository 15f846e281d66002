//! Subprocess execution.

pub mod command;

pub use command::{run, run_check, CommandOptions, CommandOutcome};

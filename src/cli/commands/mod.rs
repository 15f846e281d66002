//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`supacheck report`, `supacheck check`)
//! - Consistent global flag handling
//! - Exit-code mapping in one place

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod keys;
pub mod report;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

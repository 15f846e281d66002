//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`ConsoleUI`] for terminal usage
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use supacheck::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.show_header("Supabase Auth Configuration");
//! ui.success("Supabase CLI is accessible");
//! ```

pub mod console_ui;
pub mod mock;
pub mod output;
pub mod theme;

pub use console_ui::{create_ui, ConsoleUI};
pub use mock::MockUI;
pub use output::OutputMode;
pub use theme::{should_use_colors, ReportTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests via [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a banner header.
    fn show_header(&mut self, title: &str);

    /// Print report body text verbatim, in every output mode.
    fn report(&mut self, body: &str);
}

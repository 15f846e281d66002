//! Console UI implementation.

use super::theme::{should_use_colors, ReportTheme};
use super::{OutputMode, UserInterface};
use crate::advisory::banner_rule;

/// UI implementation writing to stdout/stderr.
///
/// Status goes to stdout, warnings and errors to stderr, so the advisory
/// body can be piped cleanly.
pub struct ConsoleUI {
    mode: OutputMode,
    theme: ReportTheme,
}

impl ConsoleUI {
    /// Create a console UI with the given theme.
    pub fn new(mode: OutputMode, theme: ReportTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for ConsoleUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.dim.apply_to(banner_rule()));
            println!("{}", self.theme.header.apply_to(title));
            println!("{}", self.theme.dim.apply_to(banner_rule()));
            println!();
        }
    }

    fn report(&mut self, body: &str) {
        println!("{}", body);
    }
}

/// Create the appropriate UI for the current terminal.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    let theme = if should_use_colors() {
        ReportTheme::new()
    } else {
        ReportTheme::plain()
    };
    Box::new(ConsoleUI::new(mode, theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_ui_reports_mode() {
        let ui = ConsoleUI::new(OutputMode::Quiet, ReportTheme::plain());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_returns_boxed_ui() {
        let ui = create_ui(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}

//! Output mode.

/// Output verbosity mode, selected by the `--verbose`/`--quiet` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including the external commands being run.
    Verbose,
    /// Show status and the advisory report.
    #[default]
    Normal,
    /// Show the advisory report only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the external commands being run.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

//! Check command implementation.
//!
//! The `supacheck check` command verifies the Supabase CLI alone.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::supabase::SupabaseCli;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

/// JSON shape for `check --json`.
#[derive(Debug, serde::Serialize)]
struct CheckOutput<'a> {
    tool: &'a str,
    available: bool,
    version: Option<&'a str>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cli = SupabaseCli::new(&self.args.target.tool);

        match cli.verify() {
            Ok(version) => {
                if self.args.json {
                    let out = CheckOutput {
                        tool: cli.tool(),
                        available: true,
                        version: Some(&version.version),
                    };
                    ui.report(&serde_json::to_string_pretty(&out)?);
                } else {
                    ui.success(&format!(
                        "Supabase CLI is accessible (version {})",
                        version.version
                    ));
                }
                Ok(CommandResult::success())
            }
            Err(e) => {
                if self.args.json {
                    let out = CheckOutput {
                        tool: cli.tool(),
                        available: false,
                        version: None,
                    };
                    ui.report(&serde_json::to_string_pretty(&out)?);
                } else {
                    ui.error(&e.to_string());
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}

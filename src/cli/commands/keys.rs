//! Keys command implementation.
//!
//! The `supacheck keys` command fetches the project's API key table and
//! prints truncated previews. Full key values never reach the terminal.

use crate::cli::args::KeysArgs;
use crate::error::Result;
use crate::supabase::{parse_key_table, SupabaseCli};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The keys command implementation.
pub struct KeysCommand {
    args: KeysArgs,
}

impl KeysCommand {
    /// Create a new keys command.
    pub fn new(args: KeysArgs) -> Self {
        Self { args }
    }
}

impl Command for KeysCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cli = SupabaseCli::new(&self.args.target.tool);

        let table = match cli.fetch_api_keys(&self.args.target.project_ref) {
            Ok(table) => table,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let keys = parse_key_table(&table);
        if keys.is_empty() {
            ui.warning("No API key rows found in tool output");
            return Ok(CommandResult::success());
        }

        if self.args.json {
            ui.report(&serde_json::to_string_pretty(&keys)?);
        } else {
            let width = keys.iter().map(|k| k.name.len()).max().unwrap_or(0);
            for key in &keys {
                ui.message(&format!("{:width$}  {}", key.name, key.preview));
            }
        }

        Ok(CommandResult::success())
    }
}

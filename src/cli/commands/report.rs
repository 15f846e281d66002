//! Report command implementation.
//!
//! The `supacheck report` command is the main flow: verify the Supabase CLI
//! is reachable, best-effort preview the service role key, and print the
//! advisory checklist. Tool verification failure is fatal (exit 1); a failed
//! or empty key lookup is reported and the advisory still prints (exit 0).

use crate::advisory::{build_advisory, build_sql_notes, AdvisoryTarget};
use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::supabase::{extract_service_key, preview, SupabaseCli};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    args: ReportArgs,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(args: ReportArgs) -> Self {
        Self { args }
    }

    /// Resolve the advisory target from CLI flags, falling back to defaults.
    fn target(&self) -> AdvisoryTarget {
        let mut target = AdvisoryTarget {
            project_ref: self.args.target.project_ref.clone(),
            ..Default::default()
        };
        if let Some(site_url) = &self.args.site_url {
            target.site_url = site_url.clone();
        }
        if !self.args.redirect_urls.is_empty() {
            target.redirect_urls = self.args.redirect_urls.clone();
        }
        target
    }

    /// Best-effort key lookup. Failures are shown, never propagated.
    ///
    /// The raw key table is never echoed, even in verbose mode, because it
    /// contains full credentials.
    fn preview_service_key(&self, cli: &SupabaseCli, target: &AdvisoryTarget, ui: &mut dyn UserInterface) {
        if ui.output_mode().shows_command_output() {
            ui.message(&format!(
                "$ {} projects api-keys --project-ref {}",
                cli.tool(),
                target.project_ref
            ));
        }
        let table = match cli.fetch_api_keys(&target.project_ref) {
            Ok(table) => table,
            Err(e) => {
                ui.error(&format!("Failed to get API keys: {}", e));
                return;
            }
        };

        match extract_service_key(&table) {
            Some(key) => {
                ui.success(&format!(
                    "Got service role key (first 20 chars): {}",
                    preview(&key)
                ));
            }
            None => {
                // Non-fatal; the advisory still prints without the preview
                ui.warning("No service_role row found in API key output");
            }
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();
        let cli = SupabaseCli::new(&self.args.target.tool);

        ui.show_header("Supabase Auth Configuration");

        if ui.output_mode().shows_command_output() {
            ui.message(&format!("$ {} --version", cli.tool()));
        }
        let version = match cli.verify() {
            Ok(v) => v,
            Err(e) => {
                ui.error(&format!("Supabase CLI not properly configured: {}", e));
                return Ok(CommandResult::failure(1));
            }
        };
        ui.success(&format!(
            "Supabase CLI is accessible (version {})",
            version.version
        ));

        if !self.args.no_keys {
            ui.message("Configuring Supabase authentication via SQL...");
            self.preview_service_key(&cli, &target, ui);
        }

        ui.message("");
        ui.message("SQL Configuration Notes:");
        ui.report(&build_sql_notes(&target));
        ui.report(&build_advisory(&target));

        ui.success("Configuration guide complete");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TargetArgs;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;

    /// Write a stub tool script and return its path as a string.
    #[cfg(unix)]
    fn write_stub(dir: &Path, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("supabase");
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    fn args_for_tool(tool: String) -> ReportArgs {
        ReportArgs {
            target: TargetArgs {
                tool,
                project_ref: "testref".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn missing_tool_exits_one_without_advisory() {
        let args = args_for_tool("supacheck-no-such-binary".to_string());
        let mut ui = MockUI::new();

        let result = ReportCommand::new(args).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.reports().is_empty());
        assert!(ui
            .errors()
            .iter()
            .any(|e| e.contains("not properly configured")));
    }

    #[cfg(unix)]
    #[test]
    fn key_fetch_failure_is_non_fatal() {
        let temp = tempfile::TempDir::new().unwrap();
        // --version works, everything else fails
        let tool = write_stub(
            temp.path(),
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 1.0.0; else echo boom >&2; exit 1; fi\n",
        );
        let mut ui = MockUI::new();

        let result = ReportCommand::new(args_for_tool(tool)).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.errors().iter().any(|e| e.contains("Failed to get API keys")));
        // The advisory still prints
        assert!(ui.reports().iter().any(|r| r.contains("MANUAL CONFIGURATION")));
    }

    #[cfg(unix)]
    #[test]
    fn service_key_preview_is_truncated() {
        let temp = tempfile::TempDir::new().unwrap();
        let tool = write_stub(
            temp.path(),
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 1.0.0; \
             else echo ' service_role | abcdefghijklmnopqrstuvwxyz123456 | jwt'; fi\n",
        );
        let mut ui = MockUI::new();

        let result = ReportCommand::new(args_for_tool(tool)).execute(&mut ui).unwrap();

        assert!(result.success);
        let preview_line = ui
            .successes()
            .iter()
            .find(|s| s.contains("service role key"))
            .expect("preview line");
        assert!(preview_line.contains("abcdefghijklmnopqrst..."));
        // Full key never appears in any channel
        assert!(!preview_line.contains("abcdefghijklmnopqrstuvwxyz123456"));
    }

    #[cfg(unix)]
    #[test]
    fn missing_service_role_row_warns_and_continues() {
        let temp = tempfile::TempDir::new().unwrap();
        let tool = write_stub(
            temp.path(),
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 1.0.0; \
             else echo ' anon | somekey'; fi\n",
        );
        let mut ui = MockUI::new();

        let result = ReportCommand::new(args_for_tool(tool)).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.warnings().iter().any(|w| w.contains("service_role")));
        assert!(ui.reports().iter().any(|r| r.contains("MANUAL CONFIGURATION")));
    }

    #[cfg(unix)]
    #[test]
    fn no_keys_flag_skips_lookup() {
        let temp = tempfile::TempDir::new().unwrap();
        // Any non-version invocation aborts loudly; --no-keys must avoid it
        let tool = write_stub(
            temp.path(),
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 1.0.0; else exit 99; fi\n",
        );
        let mut args = args_for_tool(tool);
        args.no_keys = true;
        let mut ui = MockUI::new();

        let result = ReportCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.errors().is_empty());
        assert!(ui.warnings().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn custom_urls_flow_into_advisory() {
        let temp = tempfile::TempDir::new().unwrap();
        let tool = write_stub(
            temp.path(),
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 1.0.0; else echo x; fi\n",
        );
        let mut args = args_for_tool(tool);
        args.site_url = Some("https://staging.example.app".to_string());
        args.redirect_urls = vec!["https://staging.example.app/login".to_string()];
        let mut ui = MockUI::new();

        ReportCommand::new(args).execute(&mut ui).unwrap();

        let body = ui.reports().join("\n");
        assert!(body.contains("https://staging.example.app"));
        assert!(body.contains("https://staging.example.app/login"));
        // Default site does not leak into a parameterized report
        assert!(!body.contains("godrive-academy"));
    }
}

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Supacheck - Supabase auth configuration advisor.
#[derive(Debug, Parser)]
#[command(name = "supacheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output (includes raw tool output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (advisory report only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full configuration report (default if no command specified)
    Report(ReportArgs),

    /// Verify the Supabase CLI is installed and print its version
    Check(CheckArgs),

    /// Show truncated previews of the project's API keys
    Keys(KeysArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Flags identifying the external tool and project.
#[derive(Debug, Clone, clap::Args)]
pub struct TargetArgs {
    /// Supabase CLI binary name or path
    #[arg(long, default_value = crate::supabase::DEFAULT_TOOL)]
    pub tool: String,

    /// Supabase project reference
    #[arg(long, value_name = "REF", default_value = "drrrexovkxbhevwsueck")]
    pub project_ref: String,
}

impl Default for TargetArgs {
    fn default() -> Self {
        Self {
            tool: crate::supabase::DEFAULT_TOOL.to_string(),
            project_ref: "drrrexovkxbhevwsueck".to_string(),
        }
    }
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Site URL to show in the advisory checklist
    #[arg(long, value_name = "URL")]
    pub site_url: Option<String>,

    /// Redirect URL to show in the checklist (repeatable)
    #[arg(long = "redirect-url", value_name = "URL")]
    pub redirect_urls: Vec<String>,

    /// Skip the API key lookup
    #[arg(long)]
    pub no_keys: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            target: TargetArgs::default(),
            site_url: None,
            redirect_urls: Vec::new(),
            no_keys: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `keys` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct KeysArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output as JSON (previews only, never full key values)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

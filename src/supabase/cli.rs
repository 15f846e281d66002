//! Wrapper around the external `supabase` CLI.
//!
//! Only the tool's exit status and line-oriented text output are consumed;
//! session state (login tokens, config) stays inside the tool.

use crate::error::{Result, SupacheckError};
use crate::process::{self, CommandOptions};
use regex::Regex;

/// Default binary name for the Supabase CLI.
pub const DEFAULT_TOOL: &str = "supabase";

/// Version information reported by the tool.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ToolVersion {
    /// Version string extracted from `--version` output (e.g., "1.223.10").
    pub version: String,
}

/// Handle to the external Supabase CLI binary.
#[derive(Debug, Clone)]
pub struct SupabaseCli {
    tool: String,
}

impl Default for SupabaseCli {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl SupabaseCli {
    /// Create a wrapper for the given binary name or path.
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// The binary name or path this wrapper invokes.
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Verify the CLI is installed and responding.
    ///
    /// Runs `<tool> --version`. Spawn failure, non-zero exit, and empty
    /// output are all reported as [`SupacheckError::ToolUnavailable`].
    pub fn verify(&self) -> Result<ToolVersion> {
        let outcome = process::run(&self.tool, &["--version"], &CommandOptions::default())
            .map_err(|e| SupacheckError::ToolUnavailable {
                tool: self.tool.clone(),
                message: e.to_string(),
            })?;

        if !outcome.success {
            return Err(SupacheckError::ToolUnavailable {
                tool: self.tool.clone(),
                message: format!(
                    "version check exited with code {:?}: {}",
                    outcome.exit_code,
                    outcome.stderr.trim()
                ),
            });
        }

        let raw = outcome.trimmed_stdout();
        if raw.is_empty() {
            return Err(SupacheckError::ToolUnavailable {
                tool: self.tool.clone(),
                message: "version check produced no output".to_string(),
            });
        }

        Ok(ToolVersion {
            version: extract_version(raw).unwrap_or_else(|| raw.to_string()),
        })
    }

    /// Fetch the raw API key table for a project.
    ///
    /// Runs `<tool> projects api-keys --project-ref <ref>` with the ref as a
    /// discrete argument. Returns the raw table text; parsing lives in
    /// [`crate::supabase::keys`].
    pub fn fetch_api_keys(&self, project_ref: &str) -> Result<String> {
        let args = ["projects", "api-keys", "--project-ref", project_ref];
        let outcome = process::run(&self.tool, &args, &CommandOptions::default()).map_err(|e| {
            SupacheckError::KeyFetchFailed {
                project_ref: project_ref.to_string(),
                message: e.to_string(),
            }
        })?;

        if !outcome.success {
            return Err(SupacheckError::KeyFetchFailed {
                project_ref: project_ref.to_string(),
                message: format!(
                    "exited with code {:?}: {}",
                    outcome.exit_code,
                    outcome.stderr.trim()
                ),
            });
        }

        Ok(outcome.stdout)
    }
}

/// Pull a dotted version token out of `--version` output.
///
/// The CLI prints either a bare version ("1.223.10") or a labelled one
/// ("supabase version 1.223.10"); both are handled.
fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?)").ok()?;
    re.captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

//! Argv-based subprocess execution.
//!
//! Commands are invoked as a program plus discrete argument list, never
//! through a shell. This keeps project refs and tool paths out of shell
//! interpretation entirely.

use crate::error::{Result, SupacheckError};
use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutcome {
    /// Create a success outcome.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure outcome.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout with surrounding whitespace removed.
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Render a program + args as a single display string for messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a command, capturing stdout and stderr.
///
/// Returns `Ok` for both zero and non-zero exits; the outcome carries the
/// exit status. `Err` is reserved for spawn failures (program not found,
/// permission denied).
pub fn run(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandOutcome> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|e| SupacheckError::CommandFailed {
        command: display_command(program, args),
        code: None,
        stderr: e.to_string(),
    })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        program,
        code = ?output.status.code(),
        ms = duration.as_millis() as u64,
        "command finished"
    );

    if output.status.success() {
        Ok(CommandOutcome::success(stdout, stderr, duration))
    } else {
        Ok(CommandOutcome::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a command and return success/failure.
pub fn run_check(program: &str, args: &[&str]) -> bool {
    run(program, args, &CommandOptions::default())
        .map(|r| r.success)
        .unwrap_or(false)
}

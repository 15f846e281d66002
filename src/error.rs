//! Error types for supacheck operations.
//!
//! This module defines [`SupacheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SupacheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SupacheckError::Other`) for unexpected errors
//! - Subprocess failures are values, not panics: callers decide fatality

use thiserror::Error;

/// Core error type for supacheck operations.
#[derive(Debug, Error)]
pub enum SupacheckError {
    /// The Supabase CLI could not be executed or its version check failed.
    #[error("Supabase CLI not available ({tool}): {message}")]
    ToolUnavailable { tool: String, message: String },

    /// An external command failed to spawn or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The API key fetch failed (non-fatal during `report`).
    #[error("Failed to fetch API keys for project '{project_ref}': {message}")]
    KeyFetchFailed {
        project_ref: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for supacheck operations.
pub type Result<T> = std::result::Result<T, SupacheckError>;

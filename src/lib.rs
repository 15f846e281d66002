//! Supacheck - Supabase auth configuration advisor.
//!
//! Supacheck is a one-shot operational CLI that verifies the Supabase CLI is
//! installed, previews the project's service role key (truncated, never full),
//! and prints the manual dashboard checklist for auth configuration.
//!
//! # Modules
//!
//! - [`advisory`] - Advisory report construction (pure, idempotent)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`process`] - Argv-based subprocess execution
//! - [`supabase`] - Supabase CLI wrapper and key table parsing
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```
//! use supacheck::advisory::{build_advisory, AdvisoryTarget};
//! use supacheck::supabase::extract_service_key;
//!
//! let key = extract_service_key(" service_role | abc123 |");
//! assert_eq!(key.as_deref(), Some("abc123"));
//!
//! let text = build_advisory(&AdvisoryTarget::default());
//! assert!(text.contains("MANUAL CONFIGURATION REQUIRED"));
//! ```

pub mod advisory;
pub mod cli;
pub mod error;
pub mod process;
pub mod supabase;
pub mod ui;

pub use error::{Result, SupacheckError};

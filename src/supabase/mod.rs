//! Supabase CLI integration and API key table parsing.

pub mod cli;
pub mod keys;

pub use cli::{SupabaseCli, ToolVersion, DEFAULT_TOOL};
pub use keys::{extract_service_key, parse_key_table, preview, ApiKey, SERVICE_ROLE_LABEL};

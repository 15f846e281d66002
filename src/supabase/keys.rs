//! API key table parsing.
//!
//! `supabase projects api-keys` prints a pipe-delimited table:
//!
//! ```text
//!         NAME     │               API KEY
//!   ───────────────┼──────────────────────────────
//!     anon         │ eyJhbGciOiJIUzI1NiIs...
//!     service_role │ eyJhbGciOiJIUzI1NiIs...
//! ```
//!
//! Older CLI releases use ASCII `|` separators; both are accepted. Parsing
//! is line-oriented and never panics on malformed input — a missing or
//! truncated row yields `None`, which callers surface as a warning.

use serde::Serialize;

/// Row label identifying the service role key.
pub const SERVICE_ROLE_LABEL: &str = "service_role";

/// Number of characters shown when previewing a key.
const PREVIEW_LEN: usize = 20;

/// A single row of the API key table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKey {
    /// Key name (e.g., "anon", "service_role").
    pub name: String,
    /// Truncated preview of the key value. Full values are never stored.
    pub preview: String,
}

/// Split a table line on either `│` (current CLI) or `|` (older releases).
fn split_row(line: &str) -> Vec<&str> {
    if line.contains('│') {
        line.split('│').collect()
    } else {
        line.split('|').collect()
    }
}

/// Extract the service role key from tabular CLI output.
///
/// Scans for the first line containing [`SERVICE_ROLE_LABEL`], splits it on
/// the pipe separator, and returns the second field trimmed of whitespace.
/// Returns `None` when no such line exists or the line has fewer than two
/// fields.
pub fn extract_service_key(table: &str) -> Option<String> {
    for line in table.lines() {
        if line.contains(SERVICE_ROLE_LABEL) {
            let parts = split_row(line);
            if parts.len() >= 2 {
                let key = parts[1].trim();
                if !key.is_empty() {
                    return Some(key.to_string());
                }
            }
            tracing::debug!("service_role row present but malformed: {:?}", line);
            return None;
        }
    }
    None
}

/// Parse every key row of the table into previews.
///
/// Header and separator lines (no second field, or decorative rules) are
/// skipped. Values are truncated immediately; the full key never leaves
/// this function.
pub fn parse_key_table(table: &str) -> Vec<ApiKey> {
    let mut keys = Vec::new();
    for line in table.lines() {
        let parts = split_row(line);
        if parts.len() < 2 {
            continue;
        }
        let name = parts[0].trim();
        let value = parts[1].trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        // Skip the header row and box-drawing rules
        if name.eq_ignore_ascii_case("name") || name.chars().all(|c| !c.is_alphanumeric()) {
            continue;
        }
        keys.push(ApiKey {
            name: name.to_string(),
            preview: preview(value),
        });
    }
    keys
}

/// Truncated preview of a credential: first 20 characters plus an ellipsis.
///
/// Char-boundary safe; keys shorter than the preview length are returned
/// whole, without the ellipsis.
pub fn preview(key: &str) -> String {
    let truncated: String = key.chars().take(PREVIEW_LEN).collect();
    if key.chars().count() > PREVIEW_LEN {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TABLE: &str = "\
        NAME     |               API KEY\n\
  ---------------|------------------------------\n\
    anon         | anonkey0123456789abcdefghij\n\
    service_role | abcdefghijklmnopqrstuvwxyz123456\n";

    #[test]
    fn extracts_service_key_trimmed() {
        let key = extract_service_key(SAMPLE_TABLE);
        assert_eq!(key.as_deref(), Some("abcdefghijklmnopqrstuvwxyz123456"));
    }

    #[test]
    fn extracts_from_single_line_with_padding() {
        let line = " service_role | abcdefghijklmnopqrstuvwxyz123456 | extra";
        assert_eq!(
            extract_service_key(line).as_deref(),
            Some("abcdefghijklmnopqrstuvwxyz123456")
        );
    }

    #[test]
    fn extracts_from_unicode_separator_table() {
        let table = "    anon         │ aaa\n    service_role │ secret123 │ more\n";
        assert_eq!(extract_service_key(table).as_deref(), Some("secret123"));
    }

    #[test]
    fn missing_label_returns_none() {
        let table = "    anon | anonkey0123456789\n";
        assert!(extract_service_key(table).is_none());
    }

    #[test]
    fn malformed_row_returns_none() {
        // Label present but no pipe separator at all
        assert!(extract_service_key("service_role").is_none());
    }

    #[test]
    fn empty_second_field_returns_none() {
        assert!(extract_service_key("service_role | ").is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        assert!(extract_service_key("").is_none());
    }

    #[test]
    fn preview_truncates_to_twenty_chars() {
        let p = preview("abcdefghijklmnopqrstuvwxyz123456");
        assert_eq!(p, "abcdefghijklmnopqrst...");
    }

    #[test]
    fn preview_keeps_short_keys_whole() {
        assert_eq!(preview("shortkey"), "shortkey");
    }

    #[test]
    fn preview_exactly_twenty_chars_has_no_ellipsis() {
        let key = "a".repeat(20);
        assert_eq!(preview(&key), key);
    }

    #[test]
    fn preview_is_char_boundary_safe() {
        let key = "é".repeat(30);
        let p = preview(&key);
        assert!(p.starts_with(&"é".repeat(20)));
        assert!(p.ends_with("..."));
    }

    #[test]
    fn parse_key_table_returns_all_rows() {
        let keys = parse_key_table(SAMPLE_TABLE);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].name, "anon");
        assert_eq!(keys[1].name, "service_role");
        assert_eq!(keys[1].preview, "abcdefghijklmnopqrst...");
    }

    #[test]
    fn parse_key_table_skips_header_and_rules() {
        let keys = parse_key_table(SAMPLE_TABLE);
        assert!(keys.iter().all(|k| !k.name.eq_ignore_ascii_case("name")));
        assert!(keys.iter().all(|k| k.name.chars().any(char::is_alphanumeric)));
    }

    #[test]
    fn parse_key_table_empty_input() {
        assert!(parse_key_table("").is_empty());
    }
}

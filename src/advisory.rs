//! Advisory report construction.
//!
//! The advisory is a fixed block of manual-configuration instructions:
//! dashboard URLs plus the checklist of auth settings an operator applies by
//! hand. Building it is pure string work over an [`AdvisoryTarget`], so the
//! output is byte-identical across runs for the same target.

use std::fmt::Write;

/// Defaults matching the GoDrive Academy deployment.
const DEFAULT_PROJECT_REF: &str = "drrrexovkxbhevwsueck";
const DEFAULT_SITE_URL: &str = "https://godrive-academy.netlify.app";
const DEFAULT_REDIRECT_URLS: &[&str] = &[
    "https://godrive-academy.netlify.app/demo/coach.html",
    "https://godrive-academy.netlify.app/demo/dashboard.html",
];

const BANNER_WIDTH: usize = 60;

/// The project and URLs the advisory text is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryTarget {
    /// Supabase project reference.
    pub project_ref: String,
    /// Site URL to configure in auth settings.
    pub site_url: String,
    /// Additional redirect URLs, in display order.
    pub redirect_urls: Vec<String>,
}

impl Default for AdvisoryTarget {
    fn default() -> Self {
        Self {
            project_ref: DEFAULT_PROJECT_REF.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            redirect_urls: DEFAULT_REDIRECT_URLS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AdvisoryTarget {
    /// Dashboard URL for the project's auth settings page.
    pub fn auth_settings_url(&self) -> String {
        format!(
            "https://supabase.com/dashboard/project/{}/settings/auth",
            self.project_ref
        )
    }

    /// Dashboard URL for the project's email template page.
    pub fn email_templates_url(&self) -> String {
        format!(
            "https://supabase.com/dashboard/project/{}/auth/templates",
            self.project_ref
        )
    }

    /// First redirect URL, used as the email confirmation target.
    pub fn confirmation_redirect(&self) -> &str {
        self.redirect_urls
            .first()
            .map(String::as_str)
            .unwrap_or(&self.site_url)
    }
}

/// Horizontal rule used in report banners.
pub fn banner_rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// SQL reference block shown for operator context.
///
/// Never executed; the settings it mentions are managed in the dashboard.
pub fn build_sql_notes(target: &AdvisoryTarget) -> String {
    let mut out = String::new();
    out.push_str("-- Enable email confirmations\n");
    out.push_str("ALTER SYSTEM SET app.jwt_secret TO 'your-jwt-secret';\n\n");
    out.push_str("-- These settings are managed in the Supabase Dashboard\n");
    let _ = writeln!(out, "-- Please visit: {}", target.auth_settings_url());
    out.push_str("-- And configure:\n");
    let _ = writeln!(out, "-- 1. Site URL: {}", target.site_url);
    out.push_str("-- 2. Additional Redirect URLs:\n");
    for url in &target.redirect_urls {
        let _ = writeln!(out, "--    - {}", url);
    }
    out.push_str("-- 3. Email Auth Settings:\n");
    out.push_str("--    - Enable email confirmations: ON\n");
    out.push_str("--    - Confirm email: ON\n");
    out
}

/// The manual configuration checklist: dashboard URLs and required changes.
pub fn build_advisory(target: &AdvisoryTarget) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", banner_rule());
    out.push_str("MANUAL CONFIGURATION REQUIRED\n");
    let _ = writeln!(out, "{}", banner_rule());
    out.push('\n');
    out.push_str("Visit the Supabase Dashboard and configure:\n\n");

    out.push_str("Auth Settings:\n");
    let _ = writeln!(out, "{}", target.auth_settings_url());
    out.push('\n');
    out.push_str("Required Changes:\n");
    let _ = writeln!(out, "1. Site URL: {}", target.site_url);
    out.push_str("2. Redirect URLs (one per line):\n");
    for url in &target.redirect_urls {
        let _ = writeln!(out, "   {}", url);
    }
    out.push('\n');

    out.push_str("Email Configuration:\n");
    let _ = writeln!(out, "{}", target.email_templates_url());
    out.push('\n');
    out.push_str("Required Changes:\n");
    out.push_str("1. Enable 'Confirm email' in Email Templates\n");
    out.push_str("2. Set confirmation redirect to:\n");
    let _ = writeln!(out, "   {}", target.confirmation_redirect());

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_matches_deployment() {
        let target = AdvisoryTarget::default();
        assert_eq!(target.project_ref, "drrrexovkxbhevwsueck");
        assert_eq!(target.site_url, "https://godrive-academy.netlify.app");
        assert_eq!(target.redirect_urls.len(), 2);
    }

    #[test]
    fn dashboard_urls_embed_project_ref() {
        let target = AdvisoryTarget {
            project_ref: "myref".into(),
            ..Default::default()
        };
        assert_eq!(
            target.auth_settings_url(),
            "https://supabase.com/dashboard/project/myref/settings/auth"
        );
        assert_eq!(
            target.email_templates_url(),
            "https://supabase.com/dashboard/project/myref/auth/templates"
        );
    }

    #[test]
    fn confirmation_redirect_is_first_redirect_url() {
        let target = AdvisoryTarget::default();
        assert_eq!(
            target.confirmation_redirect(),
            "https://godrive-academy.netlify.app/demo/coach.html"
        );
    }

    #[test]
    fn confirmation_redirect_falls_back_to_site_url() {
        let target = AdvisoryTarget {
            redirect_urls: vec![],
            ..Default::default()
        };
        assert_eq!(target.confirmation_redirect(), target.site_url);
    }

    #[test]
    fn advisory_is_idempotent() {
        let target = AdvisoryTarget::default();
        assert_eq!(build_advisory(&target), build_advisory(&target));
        assert_eq!(build_sql_notes(&target), build_sql_notes(&target));
    }

    #[test]
    fn advisory_lists_all_redirect_urls() {
        let target = AdvisoryTarget::default();
        let text = build_advisory(&target);
        for url in &target.redirect_urls {
            assert!(text.contains(url.as_str()));
        }
    }

    #[test]
    fn advisory_contains_dashboard_urls() {
        let target = AdvisoryTarget::default();
        let text = build_advisory(&target);
        assert!(text.contains(&target.auth_settings_url()));
        assert!(text.contains(&target.email_templates_url()));
    }

    #[test]
    fn sql_notes_are_comments_and_one_statement() {
        let target = AdvisoryTarget::default();
        let notes = build_sql_notes(&target);
        assert!(notes.contains("ALTER SYSTEM"));
        // Everything except the single reference statement is commentary
        for line in notes.lines().filter(|l| !l.is_empty()) {
            assert!(line.starts_with("--") || line.starts_with("ALTER SYSTEM"));
        }
    }

    #[test]
    fn banner_rule_is_sixty_chars() {
        assert_eq!(banner_rule().len(), 60);
    }
}

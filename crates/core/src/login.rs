//! Name-based login helpers.
//!
//! Users sign in with a display name only. The name is the case-insensitive
//! lookup key; new users get an email synthesized from it.

use std::sync::LazyLock;

use regex::Regex;

/// Domain appended to synthesized email addresses.
pub const SYNTHETIC_EMAIL_DOMAIN: &str = "example.com";

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize a submitted login name (surrounding whitespace removed).
pub fn normalize_name(name: &str) -> &str {
    name.trim()
}

/// Case-insensitive comparison of a stored name against a login name.
pub fn names_match(stored: &str, candidate: &str) -> bool {
    stored.to_lowercase() == candidate.to_lowercase()
}

/// Build the email address given to a user created through login.
///
/// Runs of whitespace become a single `.` and the result is lower-cased:
/// `"Bob Smith"` becomes `bob.smith@example.com`.
pub fn synthesize_email(name: &str) -> String {
    let local = WHITESPACE_RE.replace_all(normalize_name(name), ".");
    format!("{}@{SYNTHETIC_EMAIL_DOMAIN}", local.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_replaces_spaces_with_dots() {
        assert_eq!(synthesize_email("Bob Smith"), "bob.smith@example.com");
    }

    #[test]
    fn email_collapses_whitespace_runs() {
        assert_eq!(
            synthesize_email("Mary   Ann\tLee"),
            "mary.ann.lee@example.com"
        );
    }

    #[test]
    fn email_ignores_surrounding_whitespace() {
        assert_eq!(synthesize_email("  Alice "), "alice@example.com");
    }

    #[test]
    fn names_match_ignoring_case() {
        assert!(names_match("Alice", "alice"));
        assert!(names_match("ALICE", "aLiCe"));
        assert!(!names_match("Alice", "Alicia"));
    }
}

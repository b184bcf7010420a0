//! Email address value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::EMAIL_PATTERN;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

/// An email address with its validity recomputed on every assignment.
///
/// Validation is purely syntactic against the address grammar; no DNS or
/// network lookup is ever performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    raw: String,
    valid: bool,
}

impl EmailAddress {
    /// Wrap a raw string, computing validity.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let valid = Self::validate(&raw);
        Self { raw, valid }
    }

    /// Pure structural check against the address grammar.
    pub fn validate(raw: &str) -> bool {
        EMAIL_RE.is_match(raw)
    }

    /// Replace the underlying string, revalidating.
    pub fn set(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.valid = Self::validate(&self.raw);
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_minimal_address() {
        assert!(EmailAddress::validate("a@b.co"));
        assert!(EmailAddress::new("a@b.co").is_valid());
    }

    #[test]
    fn test_accepts_extended_local_part() {
        assert!(EmailAddress::validate("first.last+tag%x_y-z@mail.example.com"));
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(!EmailAddress::validate("a@b"));
    }

    #[test]
    fn test_rejects_single_letter_tld() {
        assert!(!EmailAddress::validate("a@b.c"));
    }

    #[test]
    fn test_rejects_plain_string() {
        assert!(!EmailAddress::validate("not-an-email"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!EmailAddress::validate(""));
        assert!(!EmailAddress::new("").is_valid());
    }

    #[test]
    fn test_set_revalidates() {
        let mut email = EmailAddress::new("a@b.co");
        assert!(email.is_valid());

        email.set("broken");
        assert!(!email.is_valid());
        assert_eq!(email.as_str(), "broken");

        email.set("fixed@example.org");
        assert!(email.is_valid());
    }
}

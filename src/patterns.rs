use regex::Regex;

use crate::error::{ImportError, Result};

/// Loose syntactic check, not RFC 5322. Matches anywhere in the field.
/// `\w` and `\b` are ASCII-only.
pub const DEFAULT_EMAIL_PATTERN: &str = r"(?-u)\b[\w\.-]+@[\w\.-]+\.\w{2,4}\b";

/// Predicate deciding whether an email field is acceptable.
///
/// Implemented for [`EmailPattern`] and for any `Fn(&str) -> bool`, so tests
/// and callers can swap the check without touching the import pipeline.
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> bool;
}

impl<F> EmailValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, email: &str) -> bool {
        self(email)
    }
}

#[derive(Debug, Clone)]
pub struct EmailPattern {
    regex: Regex,
}

impl EmailPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| ImportError::Regex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_EMAIL_PATTERN)
    }
}

impl EmailValidator for EmailPattern {
    fn is_valid(&self, email: &str) -> bool {
        self.regex.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pattern_accepts_plain_addresses() {
        let pattern = EmailPattern::standard().unwrap();
        assert!(pattern.is_valid("mail@sample.com"));
        assert!(pattern.is_valid("first.last-name@mail.example.org"));
        assert!(pattern.is_valid("x@a@b.com"));
    }

    #[test]
    fn standard_pattern_rejects_missing_parts() {
        let pattern = EmailPattern::standard().unwrap();
        assert!(!pattern.is_valid("mailsample.com"));
        assert!(!pattern.is_valid("bad-email"));
        assert!(!pattern.is_valid("mail@localhost"));
        assert!(!pattern.is_valid(""));
    }

    #[test]
    fn standard_pattern_is_ascii_only() {
        let pattern = EmailPattern::standard().unwrap();
        assert!(!pattern.is_valid("jöhn@exämple.com"));
        assert!(!pattern.is_valid("mail@exämple.com"));
        assert!(!pattern.is_valid("mail@sample.cöm"));
    }

    #[test]
    fn standard_pattern_is_not_anchored() {
        let pattern = EmailPattern::standard().unwrap();
        assert!(pattern.is_valid("<mail@sample.com>"));
        assert!(pattern.is_valid("contact: mail@sample.com (work)"));
    }

    #[test]
    fn broken_pattern_is_a_regex_error() {
        let err = EmailPattern::new(r"[\w+@").unwrap_err();
        match err {
            ImportError::Regex { pattern, .. } => assert_eq!(pattern, r"[\w+@"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn closures_are_validators() {
        let only_example = |email: &str| email.ends_with("@example.com");
        assert!(only_example.is_valid("a@example.com"));
        assert!(!only_example.is_valid("a@sample.com"));
    }
}

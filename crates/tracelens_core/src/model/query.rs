//! Investigation query input.
//!
//! # Invariants
//! - A query is submittable only when at least one trimmed field is non-empty.
//! - Normalization only trims; values are otherwise passed through verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email shape regex"));
static PHONE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-.]+$").expect("valid phone shape regex"));

const MIN_PHONE_DIGITS: usize = 7;

/// Email and/or phone pair collected by the query form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationQuery {
    pub email: String,
    pub phone: String,
}

impl InvestigationQuery {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Returns a copy with both fields trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    /// Returns whether neither field carries a value.
    pub fn is_empty(&self) -> bool {
        !self.has_email() && !self.has_phone()
    }
}

/// Best-effort guess of what a single free-form argument is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Email,
    Phone,
    Unknown,
}

/// Classifies one raw argument as email, phone or unknown.
///
/// Rules:
/// - Email: exactly one `@` with non-blank text on both sides.
/// - Phone: digits plus `+ ( ) - .` and spaces, with at least 7 digits.
pub fn classify_query(raw: &str) -> QueryKind {
    let trimmed = raw.trim();
    if EMAIL_SHAPE_RE.is_match(trimmed) {
        return QueryKind::Email;
    }
    if PHONE_SHAPE_RE.is_match(trimmed)
        && trimmed.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
    {
        return QueryKind::Phone;
    }
    QueryKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::{classify_query, InvestigationQuery, QueryKind};

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let query = InvestigationQuery::new("   ", "\t");
        assert!(query.is_empty());
        assert!(!InvestigationQuery::new("", " 555 ").is_empty());
    }

    #[test]
    fn normalized_trims_both_fields() {
        let query = InvestigationQuery::new(" a@b.io ", " +1 555 ").normalized();
        assert_eq!(query.email, "a@b.io");
        assert_eq!(query.phone, "+1 555");
    }

    #[test]
    fn classifies_email_phone_and_unknown() {
        assert_eq!(classify_query("alice@example.com"), QueryKind::Email);
        assert_eq!(classify_query("+1 (555) 123-4567"), QueryKind::Phone);
        assert_eq!(classify_query("12345"), QueryKind::Unknown);
        assert_eq!(classify_query("alice"), QueryKind::Unknown);
        assert_eq!(classify_query("a@b@c"), QueryKind::Unknown);
    }
}

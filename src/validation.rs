//! Contact form field validation.
//!
//! Every rule is a pure function of the current field value. The email rule
//! is deliberately loose: one `@`, then a dot somewhere after it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CatalogError;
use crate::models::SubmissionPayload;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// A contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Run this field's rule against `value`.
    pub fn validate(self, value: &str) -> Option<&'static str> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Message => validate_message(value),
        }
    }

    /// Read this field from a payload.
    pub fn value_of(self, payload: &SubmissionPayload) -> &str {
        match self {
            Field::Name => &payload.name,
            Field::Email => &payload.email,
            Field::Message => &payload.message,
        }
    }

    pub(crate) fn value_mut(self, payload: &mut SubmissionPayload) -> &mut String {
        match self {
            Field::Name => &mut payload.name,
            Field::Email => &mut payload.email,
            Field::Message => &mut payload.message,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(CatalogError::Validation(format!("Unknown field '{other}'"))),
        }
    }
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    (value.trim().chars().count() < NAME_MIN_CHARS).then_some(NAME_TOO_SHORT)
}

/// Checks the value exactly as it will be sent; surrounding whitespace fails
/// the pattern.
pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    (!email_pattern().is_match(value)).then_some(EMAIL_INVALID)
}

pub fn validate_message(value: &str) -> Option<&'static str> {
    (value.trim().chars().count() < MESSAGE_MIN_CHARS).then_some(MESSAGE_TOO_SHORT)
}

/// Per-field error messages; `None` means the field currently passes or has
/// not been checked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    /// Validate every field of `payload`.
    pub fn check(payload: &SubmissionPayload) -> Self {
        let mut errors = Self::default();
        for field in Field::ALL {
            errors.set(field, field.validate(field.value_of(payload)));
        }
        errors
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, error: Option<&str>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = error.map(str::to_string);
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule() {
        assert_eq!(validate_name("A"), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("  A  "), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("Al"), None);
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(validate_email(""), Some(EMAIL_REQUIRED));
        assert_eq!(validate_email("a@b"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@@b.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a b@c.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b.com"), None);
    }

    #[test]
    fn test_email_is_checked_untrimmed() {
        assert_eq!(validate_email(" a@b.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("a@b.com "), Some(EMAIL_INVALID));
        assert_eq!(validate_email("   "), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_email_rule_stays_permissive() {
        assert_eq!(validate_email("a@b.c.d"), None);
        assert_eq!(validate_email("x@y..z"), None);
        assert_eq!(validate_email("ü@ß.日本"), None);
    }

    #[test]
    fn test_message_rule_boundary() {
        assert_eq!(validate_message("123456789"), Some(MESSAGE_TOO_SHORT));
        assert_eq!(validate_message("1234567890"), None);
        assert_eq!(validate_message("   123456789   "), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        assert_eq!(validate_name("é"), Some(NAME_TOO_SHORT));
        assert_eq!(validate_message("ééééééééé"), Some(MESSAGE_TOO_SHORT));
    }

    #[test]
    fn test_check_collects_all_errors() {
        let errors = FieldErrors::check(&SubmissionPayload::default());
        assert_eq!(errors.get(Field::Name), Some(NAME_TOO_SHORT));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Message), Some(MESSAGE_TOO_SHORT));

        let ok = FieldErrors::check(&SubmissionPayload::new("Al", "a@b.com", "1234567890"));
        assert!(ok.is_empty());
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("EMAIL".parse::<Field>().unwrap(), Field::Email);
        assert!("phone".parse::<Field>().is_err());
    }
}

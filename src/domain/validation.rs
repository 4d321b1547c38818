// src/domain/validation.rs
//
// Form-field rules shared by the Venue and Artist domains.
// All problems are collected so a form can show every error at once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{DomainError, DomainResult};

/// Two-letter codes accepted for the `state` field.
pub const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const MAX_SEEKING_DESCRIPTION_CHARS: usize = 500;

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]+$").expect("valid phone regex"));

static HTTP_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("valid url regex"));

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field errors for a single form.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Value must not be blank.
    pub fn require(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, "This field is required.");
            return false;
        }
        true
    }

    pub fn state_code(&mut self, field: &str, value: &str) {
        if self.require(field, value) && !US_STATES.contains(&value.trim()) {
            self.push(field, format!("'{}' is not a US state code.", value.trim()));
        }
    }

    pub fn phone(&mut self, field: &str, value: &str) {
        if !self.require(field, value) {
            return;
        }
        let value = value.trim();
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if !PHONE_CHARS.is_match(value) || !(7..=15).contains(&digits) {
            self.push(field, "Invalid phone number.");
        }
    }

    pub fn url(&mut self, field: &str, value: &str) {
        if self.require(field, value) {
            self.optional_url(field, Some(value));
        }
    }

    pub fn optional_url(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            if !HTTP_URL.is_match(value.trim()) {
                self.push(field, "Invalid URL.");
            }
        }
    }

    pub fn max_chars(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.push(field, format!("Must be at most {} characters.", max));
            }
        }
    }

    pub fn non_empty_list(&mut self, field: &str, values: &[String]) {
        if values.iter().all(|v| v.trim().is_empty()) {
            self.push(field, "Select at least one genre.");
        }
    }

    pub fn finish(self) -> DomainResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.0))
        }
    }
}

/// Trim a free-text value, mapping blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(check: impl FnOnce(&mut FieldErrors)) -> Vec<FieldError> {
        let mut errors = FieldErrors::new();
        check(&mut errors);
        match errors.finish() {
            Ok(()) => Vec::new(),
            Err(DomainError::Validation(list)) => list,
            Err(other) => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_phone_formats() {
        assert!(errors_for(|e| e.phone("phone", "123-123-1234")).is_empty());
        assert!(errors_for(|e| e.phone("phone", "+1 (415) 000.1234")).is_empty());
        assert_eq!(errors_for(|e| e.phone("phone", "12-34")).len(), 1);
        assert_eq!(errors_for(|e| e.phone("phone", "call me")).len(), 1);
    }

    #[test]
    fn test_state_must_be_known() {
        assert!(errors_for(|e| e.state_code("state", "CA")).is_empty());
        assert!(errors_for(|e| e.state_code("state", "DC")).is_empty());
        assert_eq!(errors_for(|e| e.state_code("state", "XX")).len(), 1);
    }

    #[test]
    fn test_blank_required_field_reports_once() {
        let errors = errors_for(|e| e.state_code("state", "  "));
        assert_eq!(errors, vec![FieldError::new("state", "This field is required.")]);
    }

    #[test]
    fn test_urls() {
        assert!(errors_for(|e| e.optional_url("website_link", None)).is_empty());
        assert!(errors_for(|e| e.url("image_link", "https://img.example.com/a.png")).is_empty());
        assert_eq!(
            errors_for(|e| e.optional_url("facebook_link", Some("facebook.com/x"))).len(),
            1
        );
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text(Some("   ".into())), None);
        assert_eq!(optional_text(Some(" hi ".into())), Some("hi".into()));
        assert_eq!(optional_text(None), None);
    }
}

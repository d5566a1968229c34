use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::models::ContactFormData;

/// `local@domain.tld` shape only; no attempt at RFC 5322.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks all four fields and returns every failure, in field order.
/// An empty list means the data may be drafted.
pub fn validate(data: &ContactFormData) -> Vec<String> {
    let mut errors = Vec::new();

    if data.name.chars().count() < MIN_NAME_CHARS {
        errors.push("• Name must be at least 2 characters.".to_string());
    }
    if !is_valid_email(&data.email) {
        errors.push("• Enter a valid email address.".to_string());
    }
    if data.topic.is_empty() {
        errors.push("• Pick a topic.".to_string());
    }
    if data.message.chars().count() < MIN_MESSAGE_CHARS {
        errors.push("• Message must be at least 10 characters.".to_string());
    }

    errors
}

//! Live feedback shown while the visitor types: email hint, character
//! counter, and whether the "open email" action is available.

use serde::Serialize;

use crate::contact::models::ContactFormData;
use crate::contact::validation::{is_valid_email, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HintState {
    Ok,
    Error,
}

impl HintState {
    pub fn as_str(self) -> &'static str {
        match self {
            HintState::Ok => "ok",
            HintState::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub text: String,
    pub state: HintState,
}

/// No hint for an empty field; otherwise a thumbs-up or a format reminder.
pub fn email_hint(email: &str) -> Option<Hint> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }
    Some(if is_valid_email(email) {
        Hint {
            text: "Looks good ✅".to_string(),
            state: HintState::Ok,
        }
    } else {
        Hint {
            text: "That email looks off — double-check the format (name@example.com)."
                .to_string(),
            state: HintState::Error,
        }
    })
}

/// `"<len>/<max> characters (<remaining> remaining)"`; error once over `max`.
pub fn message_counter(message: &str, max: usize) -> Hint {
    let len = message.chars().count();
    let remaining = max as i64 - len as i64;
    Hint {
        text: format!("{len}/{max} characters ({remaining} remaining)"),
        state: if remaining < 0 {
            HintState::Error
        } else {
            HintState::Ok
        },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveFeedback {
    pub errors: Vec<String>,
    pub email_hint: Option<Hint>,
    pub counter: Hint,
    pub can_open: bool,
}

/// Whether the "open email" action is available for the raw form.
pub fn can_open_mail(raw: &ContactFormData) -> bool {
    validate(&raw.trimmed()).is_empty()
}

/// Feedback for the raw (untrimmed) form. The counter measures what is in the
/// textarea; validation sees the trimmed values.
pub fn live_feedback(raw: &ContactFormData, max: usize) -> LiveFeedback {
    LiveFeedback {
        errors: validate(&raw.trimmed()),
        can_open: can_open_mail(raw),
        email_hint: email_hint(&raw.email),
        counter: message_counter(&raw.message, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_hint_states() {
        assert_eq!(email_hint("   "), None);
        assert_eq!(email_hint("a@b.com").unwrap().state, HintState::Ok);
        let bad = email_hint("a@b").unwrap();
        assert_eq!(bad.state, HintState::Error);
        assert!(bad.text.contains("name@example.com"));
    }

    #[test]
    fn test_counter_within_limit() {
        let counter = message_counter("hello", 1000);
        assert_eq!(counter.text, "5/1000 characters (995 remaining)");
        assert_eq!(counter.state, HintState::Ok);
    }

    #[test]
    fn test_counter_over_limit_goes_negative() {
        let counter = message_counter("abcdef", 4);
        assert_eq!(counter.text, "6/4 characters (-2 remaining)");
        assert_eq!(counter.state, HintState::Error);
    }

    #[test]
    fn test_live_feedback_gates_open_action() {
        let mut data = ContactFormData {
            name: "Al".into(),
            email: "a@b.com".into(),
            topic: "job".into(),
            message: "short".into(),
        };
        let feedback = live_feedback(&data, 1000);
        assert!(!feedback.can_open);
        assert_eq!(feedback.errors.len(), 1);

        data.message = "Looking for an internship!".into();
        assert!(live_feedback(&data, 1000).can_open);
        assert!(can_open_mail(&data));

        data.email = "  ".into();
        assert!(!can_open_mail(&data));
    }

    #[test]
    fn test_live_feedback_validates_trimmed_values() {
        let data = ContactFormData {
            name: " A ".into(),
            email: " a@b.com ".into(),
            topic: "job".into(),
            message: "Looking for an internship!".into(),
        };
        let feedback = live_feedback(&data, 1000);
        assert_eq!(feedback.errors, vec!["• Name must be at least 2 characters."]);
    }
}

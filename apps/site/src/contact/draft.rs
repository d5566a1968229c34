use crate::contact::models::{topic_label, ContactFormData, EmailDraft};
use crate::contact::validation::validate;

/// Mailbox the generated draft is addressed to.
pub const RECIPIENT: &str = "arindamtrip@gmail.com";
/// Name the draft body greets.
const OWNER_NAME: &str = "Ari";

/// Validates `data` and, only if it passes, builds the draft.
/// This is the sole way to obtain an [`EmailDraft`] from form input.
pub fn draft_for(data: &ContactFormData) -> Result<EmailDraft, Vec<String>> {
    let errors = validate(data);
    if errors.is_empty() {
        Ok(build_draft(data))
    } else {
        Err(errors)
    }
}

fn build_draft(data: &ContactFormData) -> EmailDraft {
    let subject = format!(
        "[Portfolio] {} — from {}",
        topic_label(&data.topic),
        data.name
    );

    let body = format!(
        "Hi {OWNER_NAME},\n\n{}\n\n—\n{}\n{}\n",
        data.message, data.name, data.email
    );

    let preview = format!("Email draft generated ✅\n\nSubject:\n{subject}\n\nBody:\n{body}");

    EmailDraft {
        subject,
        body,
        preview,
    }
}

/// `mailto:` URI with percent-encoded recipient, subject and body.
pub fn build_mailto_url(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(to),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

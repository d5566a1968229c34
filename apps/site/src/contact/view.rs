use maud::{html, Markup, PreEscaped};

use crate::contact::hints::{live_feedback, Hint};
use crate::contact::models::{ContactFormData, Topic};

/// Status line under the form: a joined error list or a draft preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    pub fn ok(text: impl Into<String>) -> Self {
        Status {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Status {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Browser-side autosave: every edit PUTs the four fields to
/// `/api/contact/draft` and applies the returned live feedback to the email
/// hint, the counter and the open-email button.
const LIVE_FEEDBACK_SCRIPT: &str = r#"(() => {
  const form = document.getElementById("contact-form");
  if (!form) return;
  const byId = (id) => document.getElementById(id);
  const value = (id) => (byId(id) ? byId(id).value : "");
  const applyHint = (el, hint) => {
    if (!el) return;
    el.textContent = hint ? hint.text : "";
    el.dataset.state = hint ? hint.state : "";
  };
  form.addEventListener("input", () => {
    const body = JSON.stringify({
      name: value("contact-name"),
      email: value("contact-email"),
      topic: value("contact-topic"),
      message: value("contact-message"),
    });
    fetch("/api/contact/draft", {
      method: "PUT",
      headers: { "Content-Type": "application/json" },
      body,
    })
      .then((res) => (res.ok ? res.json() : null))
      .then((feedback) => {
        if (!feedback) return;
        applyHint(byId("email-hint"), feedback.email_hint);
        applyHint(byId("message-counter"), feedback.counter);
        const open = byId("open-email");
        if (open) open.disabled = !feedback.can_open;
      })
      .catch((err) => console.warn("Contact autosave failed", err));
  });
})();"#;

pub struct ContactView<'a> {
    pub form: &'a ContactFormData,
    pub status: Option<Status>,
    pub max_len: usize,
    pub animations: bool,
}

pub fn render(view: &ContactView<'_>) -> Markup {
    let form = view.form;
    let feedback = live_feedback(form, view.max_len);

    html! {
        section class="contact" {
            h1 { "Get in touch" }
            form id="contact-form" method="post" action="/contact" novalidate {
                label for="contact-name" { "Name" }
                input id="contact-name" name="name" type="text" autocomplete="name"
                    value=(form.name);

                label for="contact-email" { "Email" }
                input id="contact-email" name="email" type="email" autocomplete="email"
                    value=(form.email);
                (hint_block("email-hint", feedback.email_hint.as_ref()))

                label for="contact-topic" { "Topic" }
                select id="contact-topic" name="topic" {
                    option value="" selected[form.topic.is_empty()] { "Pick a topic" }
                    @for topic in Topic::ALL {
                        option value=(topic.value()) selected[form.topic == topic.value()] {
                            (topic.option_label())
                        }
                    }
                }

                label for="contact-message" { "Message" }
                textarea id="contact-message" name="message" rows="6"
                    maxlength=(view.max_len) { (form.message) }
                (hint_block("message-counter", Some(&feedback.counter)))

                div class="contact-actions" {
                    button type="submit" name="action" value="preview" { "Generate draft" }
                    button id="open-email" type="submit" name="action" value="open"
                        disabled[!feedback.can_open] { "Open in email app" }
                }
            }

            @if let Some(status) = &view.status {
                pre id="contact-status" aria-live="polite"
                    class=[view.animations.then_some("animate-in")]
                    data-state=(if status.is_error { "error" } else { "ok" }) {
                    (status.text)
                }
            } @else {
                pre id="contact-status" aria-live="polite" {}
            }
        }
        script { (PreEscaped(LIVE_FEEDBACK_SCRIPT)) }
    }
}

fn hint_block(id: &str, hint: Option<&Hint>) -> Markup {
    html! {
        div id=(id) class="field-hint" aria-live="polite"
            data-state=(hint.map(|h| h.state.as_str()).unwrap_or("")) {
            @if let Some(hint) = hint {
                (hint.text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_string(form: &ContactFormData, status: Option<Status>) -> String {
        render(&ContactView {
            form,
            status,
            max_len: 1000,
            animations: false,
        })
        .into_string()
    }

    #[test]
    fn test_empty_form_disables_open_button() {
        let out = render_string(&ContactFormData::default(), None);
        assert!(out.contains(r#"id="open-email" type="submit" name="action" value="open" disabled"#));
        assert!(out.contains("0/1000 characters (1000 remaining)"));
    }

    #[test]
    fn test_restored_values_are_prefilled_and_escaped() {
        let form = ContactFormData {
            name: "<Al>".into(),
            email: "a@b.com".into(),
            topic: "job".into(),
            message: "Looking for an internship!".into(),
        };
        let out = render_string(&form, None);
        assert!(out.contains(r#"value="&lt;Al&gt;""#));
        assert!(out.contains(r#"<option value="job" selected>"#));
        assert!(out.contains("Looking for an internship!</textarea>"));
        assert!(out.contains("Looks good ✅"));
        assert!(!out.contains(r#"value="open" disabled"#));
    }

    #[test]
    fn test_page_wires_autosave_on_input() {
        let out = render_string(&ContactFormData::default(), None);
        assert!(out.contains(r#"addEventListener("input""#));
        assert!(out.contains(r#"fetch("/api/contact/draft""#));
        assert!(out.contains(r#"method: "PUT""#));
        assert!(out.contains("feedback.email_hint"));
        assert!(out.contains("feedback.counter"));
        assert!(out.contains("open.disabled = !feedback.can_open"));
    }

    #[test]
    fn test_error_status_is_flagged() {
        let out = render_string(
            &ContactFormData::default(),
            Some(Status::error("• Pick a topic.")),
        );
        assert!(out.contains(r#"data-state="error""#));
        assert!(out.contains("• Pick a topic."));
    }
}

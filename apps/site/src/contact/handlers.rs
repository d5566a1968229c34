//! Axum route handlers for the contact page.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Form, Json,
};
use maud::Markup;
use serde::Deserialize;
use tracing::{error, info};

use crate::contact::draft::{build_mailto_url, draft_for, RECIPIENT};
use crate::contact::hints::{live_feedback, LiveFeedback};
use crate::contact::models::ContactFormData;
use crate::contact::persistence::{restore, save_draft, save_form};
use crate::contact::view::{render, ContactView, Status};
use crate::errors::AppError;
use crate::shell::chrome;
use crate::shell::layout::{page, Page};
use crate::state::AppState;
use crate::visitor::Visitor;

const OPEN_MAIL_PREFIX: &str = "Fill in the form first so I can generate a proper email.";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactAction {
    #[default]
    Preview,
    Open,
}

#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    #[serde(flatten)]
    pub form: ContactFormData,
    #[serde(default)]
    pub action: ContactAction,
}

/// GET /contact
///
/// Renders the form pre-filled from the visitor's last draft, if any.
pub async fn handle_contact_page(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
) -> Markup {
    let restored = restore(state.storage.as_ref(), visitor.0).await;
    let status = restored
        .last_preview
        .map(|preview| Status::ok(format!("Restored your last draft:\n\n{preview}")));
    render_page(&state, visitor, &restored.form, status).await
}

/// POST /contact
///
/// `action=preview` validates and shows the draft; `action=open` additionally
/// hands the draft to the visitor's mail client via a `mailto:` redirect.
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    let data = submission.form.trimmed();

    match (draft_for(&data), submission.action) {
        (Err(errors), action) => {
            persist_form(&state, visitor, &data).await;
            let text = match action {
                ContactAction::Preview => errors.join("\n"),
                ContactAction::Open => format!("{OPEN_MAIL_PREFIX}\n{}", errors.join("\n")),
            };
            let markup = render_page(&state, visitor, &data, Some(Status::error(text))).await;
            (StatusCode::UNPROCESSABLE_ENTITY, markup).into_response()
        }
        (Ok(draft), ContactAction::Preview) => {
            if let Err(e) = save_draft(state.storage.as_ref(), visitor.0, &data, &draft).await {
                error!("Could not persist contact draft: {e}");
            }
            let status = Status::ok(draft.preview);
            render_page(&state, visitor, &data, Some(status))
                .await
                .into_response()
        }
        (Ok(draft), ContactAction::Open) => {
            if let Err(e) = save_draft(state.storage.as_ref(), visitor.0, &data, &draft).await {
                error!("Could not persist contact draft: {e}");
            }
            info!("Handing contact draft to mail client for visitor {}", visitor.0);
            Redirect::to(&build_mailto_url(RECIPIENT, &draft.subject, &draft.body)).into_response()
        }
    }
}

/// PUT /api/contact/draft
///
/// Autosave on edit. Persists the trimmed form and returns live feedback.
pub async fn handle_autosave(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    Json(raw): Json<ContactFormData>,
) -> Result<Json<LiveFeedback>, AppError> {
    save_form(state.storage.as_ref(), visitor.0, &raw.trimmed()).await?;
    Ok(Json(live_feedback(&raw, state.config.message_max_len)))
}

async fn persist_form(state: &AppState, visitor: Visitor, data: &ContactFormData) {
    if let Err(e) = save_form(state.storage.as_ref(), visitor.0, data).await {
        error!("Could not persist contact form: {e}");
    }
}

async fn render_page(
    state: &AppState,
    visitor: Visitor,
    form: &ContactFormData,
    status: Option<Status>,
) -> Markup {
    let chrome = chrome(state, visitor).await;
    let content = render(&ContactView {
        form,
        status,
        max_len: state.config.message_max_len,
        animations: chrome.animations,
    });
    page(&chrome, Page::Contact, content)
}

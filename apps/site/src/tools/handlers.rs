//! Axum route handlers for the tools page.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Form, Json,
};
use maud::Markup;
use serde::Deserialize;
use tracing::error;

use crate::errors::AppError;
use crate::shell::chrome;
use crate::shell::layout::{page, Page};
use crate::state::AppState;
use crate::tools::coffee::{parse_hours, recommend, Recommendation};
use crate::tools::facts::EarthFact;
use crate::tools::view::{render, CoffeePanel, FactPanel};
use crate::visitor::Visitor;

#[derive(Debug, Deserialize)]
pub struct HoursForm {
    #[serde(default)]
    pub hours: String,
}

#[derive(Debug, Deserialize)]
pub struct HoursQuery {
    pub hours: Option<String>,
}

/// GET /tools
pub async fn handle_tools_page(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
) -> Markup {
    let coffee = CoffeePanel {
        hours: "",
        result: None,
    };
    render_page(&state, visitor, &coffee, &FactPanel::Idle).await
}

/// POST /tools/coffee
pub async fn handle_coffee_submit(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    Form(form): Form<HoursForm>,
) -> Response {
    let result = recommend(parse_hours(&form.hours));
    let status = if result.is_error {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    let coffee = CoffeePanel {
        hours: form.hours.trim(),
        result: Some(&result),
    };
    let markup = render_page(&state, visitor, &coffee, &FactPanel::Idle).await;
    (status, markup).into_response()
}

/// POST /tools/fact
///
/// Fetches one fact. Every failure collapses into the same retry message.
pub async fn handle_fact_submit(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
) -> Response {
    let (status, panel) = match state.facts.fetch().await {
        Ok(fact) => (StatusCode::OK, FactPanel::Loaded(fact)),
        Err(e) => {
            error!("Earth fact fetch failed: {e}");
            (StatusCode::BAD_GATEWAY, FactPanel::Failed)
        }
    };
    let coffee = CoffeePanel {
        hours: "",
        result: None,
    };
    let markup = render_page(&state, visitor, &coffee, &panel).await;
    (status, markup).into_response()
}

/// GET /api/coffee?hours=
pub async fn handle_coffee_api(
    Query(query): Query<HoursQuery>,
) -> Result<Json<Recommendation>, AppError> {
    let hours = query
        .hours
        .ok_or_else(|| AppError::Validation("hours query parameter is required".to_string()))?;
    Ok(Json(recommend(parse_hours(&hours))))
}

/// GET /api/fact
pub async fn handle_fact_api(State(state): State<AppState>) -> Result<Json<EarthFact>, AppError> {
    Ok(Json(state.facts.fetch().await?))
}

async fn render_page(
    state: &AppState,
    visitor: Visitor,
    coffee: &CoffeePanel<'_>,
    fact: &FactPanel,
) -> Markup {
    let chrome = chrome(state, visitor).await;
    page(&chrome, Page::Tools, render(coffee, fact, chrome.animations))
}

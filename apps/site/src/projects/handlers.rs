//! Axum route handlers for the projects page.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::projects::cards::CardView;
use crate::projects::filter::Filter;
use crate::projects::loader::load_projects;
use crate::projects::page::ProjectsPage;
use crate::projects::view::{render, render_unavailable};
use crate::shell::chrome;
use crate::shell::layout::{page, Page};
use crate::state::AppState;
use crate::visitor::Visitor;

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

impl FilterQuery {
    fn filter(&self) -> Filter {
        self.filter.as_deref().map(Filter::parse).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub filter: String,
    pub cards: Vec<CardView>,
}

/// GET /projects?filter=
///
/// Reloads the dataset on every view. A load failure keeps the page up and
/// shows the static "use a local web server" hint.
pub async fn handle_projects_page(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    Query(query): Query<FilterQuery>,
) -> Response {
    let chrome = chrome(&state, visitor).await;

    match load_projects(&state.config.site_root).await {
        Ok(items) => {
            let projects = ProjectsPage::new(items, query.filter());
            page(&chrome, Page::Projects, render(&projects, chrome.animations)).into_response()
        }
        Err(e) => {
            error!("Could not load projects: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                page(&chrome, Page::Projects, render_unavailable()),
            )
                .into_response()
        }
    }
}

/// GET /api/projects?filter=
pub async fn handle_projects_api(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let items = load_projects(&state.config.site_root).await?;
    let projects = ProjectsPage::new(items, query.filter());
    Ok(Json(ProjectsResponse {
        filter: projects.active_filter().as_str().to_string(),
        cards: projects.cards(),
    }))
}

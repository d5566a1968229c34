pub mod health;

use axum::{
    http::Uri,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers as contact;
use crate::errors::AppError;
use crate::home;
use crate::projects::handlers as projects;
use crate::shell::handlers as shell;
use crate::state::AppState;
use crate::tools::handlers as tools;
use crate::visitor::assign_visitor;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.site_root.join("static");

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(home::handle_home_page))
        .route(
            "/contact",
            get(contact::handle_contact_page).post(contact::handle_contact_submit),
        )
        .route("/projects", get(projects::handle_projects_page))
        .route("/tools", get(tools::handle_tools_page))
        .route("/tools/coffee", post(tools::handle_coffee_submit))
        .route("/tools/fact", post(tools::handle_fact_submit))
        .route("/theme", post(shell::handle_toggle_theme))
        // JSON API
        .route("/api/theme", post(shell::handle_toggle_theme_api))
        .route("/api/contact/draft", put(contact::handle_autosave))
        .route("/api/projects", get(projects::handle_projects_api))
        .route("/api/coffee", get(tools::handle_coffee_api))
        .route("/api/fact", get(tools::handle_fact_api))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(middleware::from_fn(assign_visitor))
        .with_state(state)
}

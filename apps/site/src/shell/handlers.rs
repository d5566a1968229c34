use axum::{
    extract::State,
    http::{header::REFERER, HeaderMap, Uri},
    response::Redirect,
    Extension, Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::shell::theme::toggle_theme;
use crate::state::AppState;
use crate::visitor::Visitor;

/// POST /theme
///
/// Flips the theme and sends the browser back where it came from.
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    let theme = toggle_theme(state.storage.as_ref(), visitor.0).await?;
    info!("Visitor {} switched to {} theme", visitor.0, theme.as_str());
    Ok(Redirect::to(&back_path(&headers)))
}

/// POST /api/theme
pub async fn handle_toggle_theme_api(
    State(state): State<AppState>,
    Extension(visitor): Extension<Visitor>,
) -> Result<Json<Value>, AppError> {
    let theme = toggle_theme(state.storage.as_ref(), visitor.0).await?;
    Ok(Json(json!({ "theme": theme })))
}

/// Local path of the `Referer`, or `/`. Never redirects off-site.
fn back_path(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| raw.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_string()))
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_referer(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_back_path_keeps_path_and_query() {
        let headers = with_referer("http://localhost:8080/projects?filter=AI");
        assert_eq!(back_path(&headers), "/projects?filter=AI");
    }

    #[test]
    fn test_back_path_defaults_to_root() {
        assert_eq!(back_path(&HeaderMap::new()), "/");
    }

    #[test]
    fn test_back_path_ignores_garbage() {
        assert_eq!(back_path(&with_referer("::::")), "/");
    }
}

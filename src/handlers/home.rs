//! Home page handler
//!
//! Supports content negotiation: Accept: application/json returns the
//! assembled view model as JSON, otherwise the rendered HTML document.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::domain::ports::ContentSource;
use crate::error::SiteError;
use crate::pages::render_home;
use crate::AppState;

/// Check if the client wants a JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /
///
/// Renders the home page.
/// - Accept: application/json → the `HomePage` model as JSON
/// - Otherwise → HTML
pub async fn get_home<C: ContentSource + 'static>(
    State(state): State<AppState<C>>,
    headers: HeaderMap,
) -> Result<Response, SiteError> {
    let page = state.home_service.home_page().await?;

    if wants_json(&headers) {
        Ok(Json(page).into_response())
    } else {
        Ok(Html(render_home(&page)).into_response())
    }
}

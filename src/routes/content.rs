//! Read-only content document endpoint.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Cache lifetime for the content document, in seconds.
pub const CONTENT_MAX_AGE_SECS: u32 = 300;

/// `GET /data/content.json` returns the document the page was rendered from.
pub async fn content_json(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!(brand = %state.content.brand.name, "serving content document");
    (
        [(header::CACHE_CONTROL, format!("public, max-age={CONTENT_MAX_AGE_SECS}"))],
        Json(state.content.as_ref().clone()),
    )
}

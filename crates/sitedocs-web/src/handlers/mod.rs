//! Request handlers, one module per screen.

pub mod documents;
pub mod projects;

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use serde_json::{Value, json};

use crate::paths::{self, Screen};

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Anything outside the route table.
///
/// Screen paths with a trailing slash are sent to their canonical form;
/// everything else is a 404.
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    if path.ends_with('/')
        && path != paths::ROOT
        && let Some(Screen::Projects | Screen::ProjectDetail { .. }) = Screen::resolve(path)
    {
        return Redirect::permanent(path.trim_end_matches('/')).into_response();
    }
    tracing::debug!(%path, "no route");
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

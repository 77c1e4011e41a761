//! Route table.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, documents, projects};
use crate::paths;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes;

    Router::new()
        .route(paths::ROOT, get(projects::redirect_to_projects))
        .route(paths::PROJECTS, get(projects::list).post(projects::create))
        .route("/projects/{project_id}/open", post(projects::open))
        .route("/projects/{project_id}/delete", post(projects::delete))
        .route(paths::PROJECT_DETAIL, get(documents::detail))
        .route(
            "/projects/{project_id}/documents",
            post(documents::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/projects/{project_id}/documents/{document_id}/view",
            post(documents::view),
        )
        .route(
            "/projects/{project_id}/documents/{document_id}/delete",
            post(documents::remove),
        )
        .route(paths::HEALTH, get(handlers::health))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

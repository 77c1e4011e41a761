//! # sitedocs-web
//!
//! Server-rendered screens for sitedocs.
//!
//! ```text
//! GET  /                                   → redirect to /projects
//! GET  /projects                           → project list (search with ?q=)
//! POST /projects                           → create project
//! POST /projects/{project_id}/open|delete  → project actions
//! GET  /projects/{project_id}              → project documents
//! POST /projects/{project_id}/documents    → upload (multipart)
//! POST /projects/{project_id}/documents/{document_id}/view|delete
//! GET  /health                             → liveness probe
//! ```
//!
//! Every mutation answers with a redirect back to the screen it came from, so
//! a browser re-renders from current registry state.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod paths;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use config::SiteDocsConfig;
pub use error::{Error, Result};
pub use routes::router;
pub use state::{AppState, DocumentWorkspaces};

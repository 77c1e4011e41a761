//! Project list screen handlers.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use sitedocs_core::ProjectId;

use crate::state::AppState;
use crate::views::{ProjectListView, into_html, render_projects};
use crate::{Result, paths};

/// Query string of the list screen.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Search text
    #[serde(default)]
    pub q: String,

    /// Id of a project the user just opened
    pub opened: Option<String>,
}

/// Body of the create form.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectForm {
    /// Requested project name
    #[serde(default)]
    pub name: String,
}

/// `GET /`: the project list is the landing screen.
pub async fn redirect_to_projects() -> Redirect {
    Redirect::temporary(paths::PROJECTS)
}

/// `GET /projects`
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Html<String>> {
    let projects = state.projects.search(&params.q).await?;

    let opened = match params.opened.as_deref().and_then(parse_project_id) {
        Some(id) => state.projects.get(&id).await?,
        None => None,
    };

    let view = ProjectListView {
        projects,
        query: params.q,
        opened,
    };
    Ok(into_html(render_projects(&view)))
}

/// `POST /projects`
#[tracing::instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateProjectForm>,
) -> Result<Redirect> {
    state.projects.create(&form.name).await?;
    Ok(Redirect::to(paths::PROJECTS))
}

/// `POST /projects/{project_id}/delete`
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    if let Some(id) = parse_project_id(&id) {
        state.projects.delete(&id).await?;
    }
    Ok(Redirect::to(paths::PROJECTS))
}

/// `POST /projects/{project_id}/open`
#[tracing::instrument(skip(state))]
pub async fn open(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect> {
    let Some(id) = parse_project_id(&id) else {
        return Ok(Redirect::to(paths::PROJECTS));
    };
    match state.projects.open(&id).await? {
        Some(project) => Ok(Redirect::to(&paths::projects_opened(&project.id))),
        None => Ok(Redirect::to(paths::PROJECTS)),
    }
}

/// Ids that fail to parse name no project, so callers treat them as unknown.
fn parse_project_id(raw: &str) -> Option<ProjectId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!(%raw, error = %err, "ignoring malformed project id");
            None
        }
    }
}

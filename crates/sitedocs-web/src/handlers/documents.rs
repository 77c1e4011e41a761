//! Project documents screen handlers.

use axum::extract::{Multipart, Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use sitedocs_core::{DocumentCategory, DocumentId, FileHandle};

use crate::state::AppState;
use crate::views::{PlaceholderProject, ProjectDetailView, into_html, render_project_detail};
use crate::{Result, paths};

/// Multipart field carrying the chosen category.
pub const CATEGORY_FIELD: &str = "category";

/// Multipart field carrying each selected file.
pub const FILES_FIELD: &str = "files";

/// Query string of the documents screen.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    /// Id of a document the user just asked to view
    pub viewing: Option<String>,
}

/// What an upload form submission carried.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    /// Chosen category, if the field was present and valid
    pub category: Option<DocumentCategory>,

    /// Selected files, in submission order
    pub files: Vec<FileHandle>,
}

/// `GET /projects/{project_id}`
///
/// Read-only: a project nothing was uploaded to renders empty without
/// allocating a registry.
#[tracing::instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Result<Html<String>> {
    let Some(registry) = state.workspaces.get(&project_id).await else {
        return Ok(into_html(render_project_detail(&ProjectDetailView::empty(
            &project_id,
        ))));
    };

    let viewing = match params.viewing.as_deref().and_then(parse_document_id) {
        Some(id) => registry.get(&id).await?,
        None => None,
    };

    let view = ProjectDetailView {
        project: PlaceholderProject::from_path(&project_id),
        selected: registry.selected_category(),
        uploading: registry.is_uploading(),
        sections: registry.sections().await?,
        viewing,
    };
    Ok(into_html(render_project_detail(&view)))
}

/// `POST /projects/{project_id}/documents`
///
/// Starts the intake and answers right away; the documents appear once the
/// simulated upload finishes.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Redirect> {
    let registry = state.workspaces.get_or_create(&project_id).await;
    let form = read_upload_form(&mut multipart).await?;

    if let Some(category) = form.category {
        registry.select_category(category);
    }
    let category = registry.selected_category();
    let count = form.files.len();

    match registry.spawn_intake(form.files, category) {
        Some(_) => tracing::info!(%project_id, %category, count, "intake started"),
        None => tracing::debug!(%project_id, "upload without files ignored"),
    }
    Ok(Redirect::to(&paths::project_detail(&project_id)))
}

/// `POST /projects/{project_id}/documents/{document_id}/delete`
#[tracing::instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path((project_id, document_id)): Path<(String, String)>,
) -> Result<Redirect> {
    if let Some(id) = parse_document_id(&document_id)
        && let Some(registry) = state.workspaces.get(&project_id).await
    {
        registry.remove(&id).await?;
    }
    Ok(Redirect::to(&paths::project_detail(&project_id)))
}

/// `POST /projects/{project_id}/documents/{document_id}/view`
#[tracing::instrument(skip(state))]
pub async fn view(
    State(state): State<AppState>,
    Path((project_id, document_id)): Path<(String, String)>,
) -> Result<Redirect> {
    let back = Redirect::to(&paths::project_detail(&project_id));
    let Some(id) = parse_document_id(&document_id) else {
        return Ok(back);
    };
    let Some(registry) = state.workspaces.get(&project_id).await else {
        return Ok(back);
    };
    match registry.view(&id).await? {
        Some(doc) => Ok(Redirect::to(&paths::project_detail_viewing(
            &project_id,
            &doc.id,
        ))),
        None => Ok(back),
    }
}

/// Collect the category and file metadata from an upload submission.
///
/// File contents are counted and dropped. Parts with no filename are skipped:
/// browsers send one when the picker is left empty.
pub async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(CATEGORY_FIELD) => {
                let value = field.text().await?;
                match value.parse() {
                    Ok(category) => form.category = Some(category),
                    Err(err) => tracing::warn!(error = %err, "keeping selected category"),
                }
            }
            Some(FILES_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content_type = field.content_type().map(str::to_owned);

                let mut size = 0u64;
                while let Some(chunk) = field.chunk().await? {
                    size += chunk.len() as u64;
                }

                if file_name.is_empty() {
                    continue;
                }
                let mut file = FileHandle::new(file_name, size);
                file.content_type = content_type;
                form.files.push(file);
            }
            other => tracing::debug!(field = ?other, "ignoring unknown upload field"),
        }
    }

    Ok(form)
}

fn parse_document_id(raw: &str) -> Option<DocumentId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!(%raw, error = %err, "ignoring malformed document id");
            None
        }
    }
}

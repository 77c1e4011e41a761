//! The project documents screen.

use maud::{Markup, html};
use sitedocs_core::{Document, DocumentCategory, Section, format_size};

use crate::paths;

const PLACEHOLDER_DESCRIPTION: &str =
    "A construction project with various documents and specifications";

/// Project header shown on the documents screen.
///
/// Built from the path segment alone; the project registry is not consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderProject {
    /// The path segment
    pub id: String,

    /// Display name, `Project {id}`
    pub name: String,

    /// Fixed description text
    pub description: &'static str,
}

impl PlaceholderProject {
    /// Synthesize the header for `project_id`.
    pub fn from_path(project_id: &str) -> Self {
        Self {
            id: project_id.to_string(),
            name: format!("Project {project_id}"),
            description: PLACEHOLDER_DESCRIPTION,
        }
    }
}

/// Everything the documents screen shows.
#[derive(Debug, Clone)]
pub struct ProjectDetailView {
    /// Header
    pub project: PlaceholderProject,

    /// Category preselected in the upload form
    pub selected: DocumentCategory,

    /// Whether an intake is in flight
    pub uploading: bool,

    /// Non-empty category sections, in display order
    pub sections: Vec<Section>,

    /// Document the user just asked to view, if any
    pub viewing: Option<Document>,
}

impl ProjectDetailView {
    /// The screen for a project nothing has been uploaded to.
    pub fn empty(project_id: &str) -> Self {
        Self {
            project: PlaceholderProject::from_path(project_id),
            selected: DocumentCategory::default(),
            uploading: false,
            sections: Vec::new(),
            viewing: None,
        }
    }

    fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.documents.is_empty())
    }
}

/// Render the project documents screen.
pub fn render_project_detail(view: &ProjectDetailView) -> Markup {
    let project_id = view.project.id.as_str();
    let body = html! {
        div style="max-width: 1200px; margin: 2rem auto; padding: 0 1rem" {
            div style="margin-bottom: 2rem" {
                a href=(paths::PROJECTS) style="display: inline-block; margin-bottom: 1rem; padding: 0.5rem 1rem; background: #f5f5f5; border: 1px solid #ddd; border-radius: 4px" {
                    "← Back to Projects"
                }
                h1 { (view.project.name) }
                p style="color: #666; margin-bottom: 0" { (view.project.description) }
            }

            @if let Some(doc) = &view.viewing {
                p role="status" style="padding: 0.5rem; background: #eef6ff; border: 1px solid #cfe2ff" {
                    "Opening " (doc.name)
                }
            }

            section style="background: #f9f9f9; padding: 1.5rem; border-radius: 8px; margin-bottom: 2rem; border: 1px solid #e0e0e0" {
                h2 style="margin-top: 0; margin-bottom: 1rem" { "Upload Documents" }
                form method="post" action=(paths::documents(project_id)) enctype="multipart/form-data"
                    style="display: flex; gap: 1rem; align-items: flex-end; margin-bottom: 1rem" {
                    div {
                        label for="document-type" style="display: block; margin-bottom: 0.5rem; font-weight: 500" {
                            "Document Type:"
                        }
                        select id="document-type" name="category" style="padding: 0.5rem" {
                            @for category in DocumentCategory::ALL {
                                option value=(category.as_str()) selected[category == view.selected] {
                                    (category.label())
                                }
                            }
                        }
                    }
                    div {
                        label for="file-upload" style="display: block; margin-bottom: 0.5rem; font-weight: 500" {
                            "Choose Files:"
                        }
                        input id="file-upload" type="file" name="files" multiple
                            accept=(paths::ACCEPTED_FILE_TYPES) style="padding: 0.5rem";
                    }
                    button type="submit" disabled[view.uploading] { "Upload" }
                }

                @if view.uploading {
                    div style="color: #666; font-style: italic" { "Uploading files..." }
                }
            }

            @for section in &view.sections {
                (render_section(project_id, section))
            }

            @if view.is_empty() {
                div style="text-align: center; padding: 3rem; color: #666; background: #f9f9f9; border-radius: 8px; border: 1px solid #e0e0e0" {
                    div style="font-size: 3rem; margin-bottom: 1rem" { "📁" }
                    h3 { "No documents uploaded yet" }
                    p { "Upload your first document using the form above to get started." }
                }
            }
        }
    };
    let refresh = view.uploading.then_some(1);
    super::page(&view.project.name, refresh, body)
}

fn render_section(project_id: &str, section: &Section) -> Markup {
    html! {
        section data-category=(section.category.as_str()) style="margin-bottom: 2rem" {
            h2 style="border-bottom: 2px solid #007bff; padding-bottom: 0.5rem; margin-bottom: 1rem" {
                (section.category.label())
            }
            div style="display: grid; gap: 1rem" {
                @for doc in &section.documents {
                    (render_document(project_id, doc))
                }
            }
        }
    }
}

fn render_document(project_id: &str, doc: &Document) -> Markup {
    html! {
        div class="document" style="display: flex; align-items: center; justify-content: space-between; padding: 1rem; border: 1px solid #e0e0e0; border-radius: 6px; background: #fff" {
            div style="display: flex; align-items: center; gap: 1rem" {
                div style="width: 40px; height: 40px; background: #f0f0f0; border-radius: 4px; display: flex; align-items: center; justify-content: center; font-size: 18px" {
                    "📄"
                }
                div {
                    div style="font-weight: 500; margin-bottom: 0.25rem" { (doc.name) }
                    div style="font-size: 0.875rem; color: #666" {
                        (format_size(doc.size)) " • " (doc.uploaded_at.format("%-m/%-d/%Y").to_string())
                    }
                }
            }
            div style="display: flex; gap: 0.5rem" {
                form method="post" action=(paths::document_view(project_id, &doc.id)) {
                    button type="submit" style="padding: 0.5rem 1rem; background: #007bff; color: white; border: none; border-radius: 4px" {
                        "View"
                    }
                }
                form method="post" action=(paths::document_delete(project_id, &doc.id)) {
                    button type="submit" style="padding: 0.5rem 1rem; background: #dc3545; color: white; border: none; border-radius: 4px" {
                        "Delete"
                    }
                }
            }
        }
    }
}

//! The static path table and URL builders for links and form actions.

use std::fmt::Write;

use sitedocs_core::{DocumentId, ProjectId};

/// Root path; redirects to the project list.
pub const ROOT: &str = "/";

/// Project list screen.
pub const PROJECTS: &str = "/projects";

/// Project documents screen.
pub const PROJECT_DETAIL: &str = "/projects/{project_id}";

/// Liveness probe.
pub const HEALTH: &str = "/health";

/// Accept-filter for the file picker.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.xls,.xlsx,.dwg,.jpg,.jpeg,.png,.txt";

/// Screen reached through a path in the static table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// `/`, which sends the browser to [`Screen::Projects`]
    Root,
    /// `/projects`
    Projects,
    /// `/projects/{project_id}`
    ProjectDetail {
        /// The opaque path segment
        project_id: String,
    },
}

impl Screen {
    /// Match a request path against the static table.
    pub fn resolve(path: &str) -> Option<Screen> {
        if path == ROOT {
            return Some(Screen::Root);
        }
        let rest = path.strip_prefix(PROJECTS)?;
        match rest.trim_end_matches('/') {
            "" => Some(Screen::Projects),
            segment => {
                let id = segment.strip_prefix('/')?;
                (!id.is_empty() && !id.contains('/')).then(|| Screen::ProjectDetail {
                    project_id: id.to_string(),
                })
            }
        }
    }
}

/// `/projects?opened={id}`
pub fn projects_opened(id: &ProjectId) -> String {
    format!("{PROJECTS}?opened={id}")
}

/// `/projects/{id}/open`
pub fn project_open(id: &ProjectId) -> String {
    format!("{PROJECTS}/{id}/open")
}

/// `/projects/{id}/delete`
pub fn project_delete(id: &ProjectId) -> String {
    format!("{PROJECTS}/{id}/delete")
}

/// `/projects/{project_id}`
pub fn project_detail(project_id: &str) -> String {
    format!("{PROJECTS}/{}", encode_segment(project_id))
}

/// `/projects/{project_id}?viewing={document_id}`
pub fn project_detail_viewing(project_id: &str, document_id: &DocumentId) -> String {
    format!("{}?viewing={document_id}", project_detail(project_id))
}

/// `/projects/{project_id}/documents`
pub fn documents(project_id: &str) -> String {
    format!("{}/documents", project_detail(project_id))
}

/// `/projects/{project_id}/documents/{document_id}/view`
pub fn document_view(project_id: &str, document_id: &DocumentId) -> String {
    format!("{}/{document_id}/view", documents(project_id))
}

/// `/projects/{project_id}/documents/{document_id}/delete`
pub fn document_delete(project_id: &str, document_id: &DocumentId) -> String {
    format!("{}/{document_id}/delete", documents(project_id))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

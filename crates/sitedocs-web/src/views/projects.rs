//! The project list screen.

use maud::{Markup, html};
use sitedocs_core::Project;

use crate::paths;

/// Everything the list screen shows.
#[derive(Debug, Clone, Default)]
pub struct ProjectListView {
    /// Projects matching the current query
    pub projects: Vec<Project>,

    /// The search box contents
    pub query: String,

    /// Project the user just opened, if any
    pub opened: Option<Project>,
}

/// Render the project list screen.
pub fn render_projects(view: &ProjectListView) -> Markup {
    let body = html! {
        div style="max-width: 720px; margin: 2rem auto; padding: 0 1rem" {
            h1 { "Projects" }

            @if let Some(project) = &view.opened {
                p role="status" style="padding: 0.5rem; background: #eef6ff; border: 1px solid #cfe2ff" {
                    "Open " (project.name)
                }
            }

            section style="margin-bottom: 2rem" {
                h2 style="margin-bottom: 0.5rem" { "Create a project" }
                form method="post" action=(paths::PROJECTS) style="display: flex; gap: 0.5rem" {
                    input type="text" name="name" placeholder="Project name"
                        aria-label="Project name" style="flex: 1; padding: 0.5rem";
                    button type="submit" { "Create" }
                }
            }

            section {
                h2 style="margin-bottom: 0.5rem" { "Find existing projects" }
                form method="get" action=(paths::PROJECTS) {
                    input type="search" name="q" value=(view.query)
                        placeholder="Search projects..." aria-label="Search projects"
                        style="width: 100%; padding: 0.5rem; margin-bottom: 1rem";
                }

                @if view.projects.is_empty() {
                    p style="color: #666" { "No projects found." }
                } @else {
                    ul style="list-style: none; padding: 0; margin: 0" {
                        @for project in &view.projects {
                            li style="padding: 0.75rem 0; border-bottom: 1px solid #eaeaea; display: flex; align-items: center; justify-content: space-between" {
                                span { (project.name) }
                                div style="display: flex; gap: 0.5rem" {
                                    form method="post" action=(paths::project_open(&project.id)) {
                                        button type="submit" { "Open" }
                                    }
                                    form method="post" action=(paths::project_delete(&project.id)) {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    super::page("Projects", None, body)
}

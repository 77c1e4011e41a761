//! HTML rendering for the two screens.

mod project_detail;
mod projects;

pub use project_detail::{PlaceholderProject, ProjectDetailView, render_project_detail};
pub use projects::{ProjectListView, render_projects};

use axum::response::Html;
use maud::{DOCTYPE, Markup, html};

/// Wrap a page body in the shared document shell.
///
/// `refresh_secs` adds a meta refresh, used while uploads are in flight.
pub(crate) fn page(title: &str, refresh_secs: Option<u32>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(secs) = refresh_secs {
                    meta http-equiv="refresh" content=(secs);
                }
                title { (title) }
            }
            body style="font-family: system-ui, sans-serif" {
                (body)
            }
        }
    }
}

/// Convert rendered markup into an HTML response.
pub fn into_html(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

//! Project list screen flows.

use axum::http::StatusCode;

use crate::common::TestHarness;

#[tokio::test]
async fn test_duplicate_names_collapse_to_one_entry() {
    let h = TestHarness::new();

    h.post_form("/projects", "name=Acme").await;
    h.post_form("/projects", "name=acme").await;
    h.post_form("/projects", "name=++ACME++").await;

    let projects = h.state.projects.list().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Acme");

    let page = h.get("/projects").await;
    assert_eq!(page.body.matches("<span>Acme</span>").count(), 1);
}

#[tokio::test]
async fn test_blank_name_is_ignored() {
    let h = TestHarness::new();
    let page = h.post_form("/projects", "name=+++").await;

    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert!(h.state.projects.list().await.unwrap().is_empty());
    assert!(h.get("/projects").await.body.contains("No projects found."));
}

#[tokio::test]
async fn test_newest_project_listed_first() {
    let h = TestHarness::new();
    h.create_project("Harbor Tower").await;
    h.create_project("Mill Street").await;

    let body = h.get("/projects").await.body;
    let mill = body.find("Mill Street").unwrap();
    let harbor = body.find("Harbor Tower").unwrap();
    assert!(mill < harbor);
}

#[tokio::test]
async fn test_search_filters_case_insensitively() {
    let h = TestHarness::new();
    h.create_project("Harbor Tower").await;
    h.create_project("Mill Street").await;

    let body = h.get("/projects?q=TOWER").await.body;
    assert!(body.contains("Harbor Tower"));
    assert!(!body.contains("Mill Street"));
    assert!(body.contains("value=\"TOWER\""));

    let body = h.get("/projects?q=nothing+here").await.body;
    assert!(body.contains("No projects found."));

    // Surrounding whitespace in the query is ignored.
    let body = h.get("/projects?q=++mill++").await.body;
    assert!(body.contains("Mill Street"));
    assert!(!body.contains("Harbor Tower"));
}

#[tokio::test]
async fn test_delete_removes_only_that_project() {
    let h = TestHarness::new();
    let harbor = h.create_project("Harbor Tower").await;
    h.create_project("Mill Street").await;

    let page = h
        .post_form(&format!("/projects/{harbor}/delete"), "")
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/projects"));

    let body = h.get("/projects").await.body;
    assert!(!body.contains("Harbor Tower"));
    assert!(body.contains("Mill Street"));

    // A second delete of the same id changes nothing.
    h.post_form(&format!("/projects/{harbor}/delete"), "").await;
    assert_eq!(h.state.projects.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleted_name_can_be_reused() {
    let h = TestHarness::new();
    let id = h.create_project("Acme").await;
    h.post_form(&format!("/projects/{id}/delete"), "").await;

    let again = h.create_project("acme").await;
    assert_ne!(id, again);
}

#[tokio::test]
async fn test_open_shows_notice() {
    let h = TestHarness::new();
    let id = h.create_project("Harbor Tower").await;

    let page = h.post_form(&format!("/projects/{id}/open"), "").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    let location = page.location.unwrap();
    assert_eq!(location, format!("/projects?opened={id}"));

    let body = h.get(&location).await.body;
    assert!(body.contains("Open Harbor Tower"));
    assert_eq!(h.state.projects.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_open_unknown_project_has_no_notice() {
    let h = TestHarness::new();
    h.create_project("Harbor Tower").await;

    let unknown = sitedocs_core::ProjectId::new();
    let page = h.post_form(&format!("/projects/{unknown}/open"), "").await;
    assert_eq!(page.location.as_deref(), Some("/projects"));

    let body = h.get(&format!("/projects?opened={unknown}")).await.body;
    assert!(!body.contains("Open Harbor Tower"));
}

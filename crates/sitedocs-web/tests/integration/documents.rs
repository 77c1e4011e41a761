//! Project documents screen flows.

use std::time::Duration;

use axum::http::StatusCode;
use sitedocs_core::DocumentCategory;

use crate::common::{Part, TestHarness};

const PROJECT: &str = "42";

fn file<'a>(name: &'a str, bytes: &'a [u8]) -> Part<'a> {
    Part::File { name, bytes }
}

#[tokio::test]
async fn test_upload_groups_documents_by_category() {
    let h = TestHarness::new();
    let blueprint = vec![0u8; 1536];

    let page = h
        .post_multipart(
            "/projects/42/documents",
            &[
                Part::Category("blueprint"),
                file("floor-1.pdf", &blueprint),
                file("floor-2.pdf", b"plan"),
            ],
        )
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/projects/42"));
    h.wait_idle(PROJECT).await;

    h.post_multipart(
        "/projects/42/documents",
        &[Part::Category("scope"), file("scope.docx", b"scope")],
    )
    .await;
    h.wait_idle(PROJECT).await;

    let body = h.get("/projects/42").await.body;
    assert!(body.contains("data-category=\"blueprint\""));
    assert!(body.contains("data-category=\"scope\""));
    assert!(!body.contains("data-category=\"specification\""));
    assert_eq!(body.matches("class=\"document\"").count(), 3);
    assert!(body.contains("1.5 KB"));
    assert!(!body.contains("No documents uploaded yet"));

    // Scope is displayed before blueprints.
    let scope = body.find("data-category=\"scope\"").unwrap();
    let blueprints = body.find("data-category=\"blueprint\"").unwrap();
    assert!(scope < blueprints);

    let registry = h.state.workspaces.get(PROJECT).await.unwrap();
    let names: Vec<_> = registry
        .group_by_type(DocumentCategory::Blueprint)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["floor-1.pdf", "floor-2.pdf"]);
}

#[tokio::test]
async fn test_category_choice_is_remembered() {
    let h = TestHarness::new();
    h.post_multipart(
        "/projects/42/documents",
        &[Part::Category("change_order"), file("co-7.pdf", b"x")],
    )
    .await;
    h.wait_idle(PROJECT).await;

    // The next upload carries no category and reuses the last choice.
    h.post_multipart("/projects/42/documents", &[file("co-8.pdf", b"y")])
        .await;
    h.wait_idle(PROJECT).await;

    let registry = h.state.workspaces.get(PROJECT).await.unwrap();
    assert_eq!(registry.selected_category(), DocumentCategory::ChangeOrder);
    assert_eq!(
        registry
            .group_by_type(DocumentCategory::ChangeOrder)
            .await
            .unwrap()
            .len(),
        2
    );

    let body = h.get("/projects/42").await.body;
    assert!(body.contains("<option value=\"change_order\" selected>"));
}

#[tokio::test]
async fn test_invalid_category_keeps_selection() {
    let h = TestHarness::new();
    h.post_multipart(
        "/projects/42/documents",
        &[Part::Category("invoice"), file("a.pdf", b"a")],
    )
    .await;
    h.wait_idle(PROJECT).await;

    let registry = h.state.workspaces.get(PROJECT).await.unwrap();
    let docs = registry.list().await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].category, DocumentCategory::Specification);
}

#[tokio::test]
async fn test_upload_without_files_is_noop() {
    let h = TestHarness::new();

    // An empty picker still sends a files part, with no filename.
    let page = h
        .post_multipart(
            "/projects/42/documents",
            &[Part::Category("scope"), file("", b"")],
        )
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);

    let registry = h.state.workspaces.get(PROJECT).await.unwrap();
    assert!(!registry.is_uploading());
    assert!(registry.list().await.unwrap().is_empty());

    let body = h.get("/projects/42").await.body;
    assert!(body.contains("No documents uploaded yet"));
    assert!(!body.contains("Uploading files..."));
}

#[tokio::test]
async fn test_uploading_notice_while_in_flight() {
    let h = TestHarness::with_delay(Duration::from_secs(60));
    h.post_multipart("/projects/42/documents", &[file("slow.pdf", b"s")])
        .await;

    let body = h.get("/projects/42").await.body;
    assert!(body.contains("Uploading files..."));
    assert!(body.contains("http-equiv=\"refresh\""));
    assert!(body.contains("<button type=\"submit\" disabled>Upload</button>"));
    assert!(body.contains("No documents uploaded yet"));
}

#[tokio::test]
async fn test_view_then_remove_document() {
    let h = TestHarness::new();
    h.post_multipart("/projects/42/documents", &[file("spec.pdf", b"spec")])
        .await;
    h.wait_idle(PROJECT).await;

    let registry = h.state.workspaces.get(PROJECT).await.unwrap();
    let id = registry.list().await.unwrap()[0].id;

    let page = h
        .post_form(&format!("/projects/42/documents/{id}/view"), "")
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    let location = page.location.unwrap();
    assert_eq!(location, format!("/projects/42?viewing={id}"));
    assert!(h.get(&location).await.body.contains("Opening spec.pdf"));

    let page = h
        .post_form(&format!("/projects/42/documents/{id}/delete"), "")
        .await;
    assert_eq!(page.location.as_deref(), Some("/projects/42"));
    assert!(registry.list().await.unwrap().is_empty());
    assert!(
        h.get("/projects/42")
            .await
            .body
            .contains("No documents uploaded yet")
    );

    // Removing again is a silent no-op.
    let page = h
        .post_form(&format!("/projects/42/documents/{id}/delete"), "")
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_projects_have_separate_documents() {
    let h = TestHarness::new();
    h.post_multipart("/projects/1/documents", &[file("one.pdf", b"1")])
        .await;
    h.wait_idle("1").await;

    let body = h.get("/projects/2").await.body;
    assert!(body.contains("Project 2"));
    assert!(body.contains("No documents uploaded yet"));
    assert!(!body.contains("one.pdf"));

    assert!(h.get("/projects/1").await.body.contains("one.pdf"));
    assert_eq!(h.state.workspaces.len().await, 1);
}

#[tokio::test]
async fn test_reads_do_not_allocate_registries() {
    let h = TestHarness::new();
    for i in 0..50 {
        let body = h.get(&format!("/projects/random-{i}")).await.body;
        assert!(body.contains("No documents uploaded yet"));
    }

    let unknown = sitedocs_core::DocumentId::new();
    let page = h
        .post_form(&format!("/projects/7/documents/{unknown}/view"), "")
        .await;
    assert_eq!(page.location.as_deref(), Some("/projects/7"));
    let page = h
        .post_form(&format!("/projects/7/documents/{unknown}/delete"), "")
        .await;
    assert_eq!(page.location.as_deref(), Some("/projects/7"));
    assert!(
        h.get(&format!("/projects/7?viewing={unknown}"))
            .await
            .body
            .contains("Project 7")
    );

    assert!(h.state.workspaces.is_empty().await);
}

#[tokio::test]
async fn test_viewing_notice_survives_refresh() {
    let h = TestHarness::new();
    h.post_multipart("/projects/42/documents", &[file("spec.pdf", b"spec")])
        .await;
    h.wait_idle(PROJECT).await;

    let registry = h.state.workspaces.get(PROJECT).await.unwrap();
    let id = registry.list().await.unwrap()[0].id;

    for _ in 0..3 {
        let body = h.get(&format!("/projects/42?viewing={id}")).await.body;
        assert!(body.contains("Opening spec.pdf"));
    }
    assert_eq!(registry.list().await.unwrap().len(), 1);
}

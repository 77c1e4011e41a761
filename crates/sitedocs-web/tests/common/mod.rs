//! Common test utilities and harness for sitedocs integration tests.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use sitedocs_core::ProjectRegistry;
use sitedocs_web::{AppState, DocumentWorkspaces, router};
use tower::ServiceExt;

/// Intake delay used by the harness.
pub const TEST_DELAY: Duration = Duration::from_millis(20);

const BOUNDARY: &str = "sitedocs-test-boundary";

/// Test harness wrapping a fresh in-memory app.
pub struct TestHarness {
    /// State shared with the router
    pub state: AppState,

    /// Router under test
    pub app: Router,
}

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct Page {
    /// Response status
    pub status: StatusCode,

    /// `Location` header, if any
    pub location: Option<String>,

    /// Response body as text
    pub body: String,
}

/// One part of a multipart upload.
pub enum Part<'a> {
    /// The `category` field
    Category(&'a str),

    /// One `files` entry
    File {
        /// Filename sent with the part
        name: &'a str,

        /// File contents
        bytes: &'a [u8],
    },
}

impl TestHarness {
    /// Creates a harness with the short test intake delay.
    pub fn new() -> Self {
        Self::with_delay(TEST_DELAY)
    }

    /// Creates a harness with a custom intake delay.
    pub fn with_delay(delay: Duration) -> Self {
        let state = AppState::new(
            ProjectRegistry::in_memory(),
            DocumentWorkspaces::new(delay),
            16 * 1024 * 1024,
        );
        let app = router(state.clone());
        Self { state, app }
    }

    /// Sends `request` through the router.
    pub async fn send(&self, request: Request<Body>) -> Page {
        let resp = self.app.clone().oneshot(request).await.unwrap();
        into_page(resp).await
    }

    /// `GET uri`
    pub async fn get(&self, uri: &str) -> Page {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// `POST uri` with a url-encoded form body.
    pub async fn post_form(&self, uri: &str, body: &str) -> Page {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// `POST uri` with a multipart body built from `parts`.
    pub async fn post_multipart(&self, uri: &str, parts: &[Part<'_>]) -> Page {
        self.send(
            Request::post(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }

    /// Creates a project through the form and returns its id.
    pub async fn create_project(&self, name: &str) -> String {
        let page = self
            .post_form("/projects", &format!("name={}", name.replace(' ', "+")))
            .await;
        assert_eq!(page.status, StatusCode::SEE_OTHER);
        let projects = self.state.projects.list().await.unwrap();
        projects
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.id.to_string())
            .expect("project was not created")
    }

    /// Waits for every in-flight intake of `project_id` to land.
    pub async fn wait_idle(&self, project_id: &str) {
        let registry = self
            .state
            .workspaces
            .get(project_id)
            .await
            .expect("no registry for project");
        registry
            .tracker()
            .wait_idle(Duration::from_secs(5))
            .await
            .unwrap();
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

async fn into_page(resp: Response) -> Page {
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    Page {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Builds a `multipart/form-data` body by hand.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Category(value) => {
                body.extend_from_slice(
                    b"Content-Disposition: form-data; name=\"category\"\r\n\r\n",
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File { name, bytes } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

//! Error types for sitedocs-web

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for sitedocs-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sitedocs-web
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from sitedocs-core
    #[error("Core error: {0}")]
    Core(#[from] sitedocs_core::Error),

    /// I/O error (config files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed multipart upload
    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// HTTP status to answer with.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Multipart(err) => err.status(),
            Error::Core(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

//! Uploaded-document records and the file handles they point at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DocumentCategory, DocumentId};

/// Metadata for a file selected for upload.
///
/// The payload itself is never retained; the handle only carries what the
/// client reported about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    /// File name as reported by the client
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// MIME type, if the client sent one
    pub content_type: Option<String>,
}

impl FileHandle {
    /// Creates a handle with no content type.
    pub fn new<S: Into<String>>(name: S, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: None,
        }
    }

    /// Sets the content type.
    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// An uploaded-file placeholder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier, generated at intake
    pub id: DocumentId,

    /// Display name, taken from the source file
    pub name: String,

    /// Category chosen at intake
    pub category: DocumentCategory,

    /// Size in bytes
    pub size: u64,

    /// When the record was constructed
    pub uploaded_at: DateTime<Utc>,

    /// The file this record stands for
    pub file: FileHandle,
}

impl Document {
    /// Builds a record for `file` under `category`, stamped with `uploaded_at`.
    pub fn from_file(
        file: FileHandle,
        category: DocumentCategory,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            name: file.name.clone(),
            category,
            size: file.size,
            uploaded_at,
            file,
        }
    }
}

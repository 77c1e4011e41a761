//! Project records.

use serde::{Deserialize, Serialize};

use crate::types::ProjectId;

/// A named entity documents are organized under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, generated at creation
    pub id: ProjectId,

    /// Display name, trimmed and non-empty
    pub name: String,
}

impl Project {
    /// Creates a project from raw form input.
    ///
    /// Returns `None` when the input is empty after trimming.
    pub fn from_input(input: &str) -> Option<Self> {
        let name = normalize_name(input)?;
        Some(Self {
            id: ProjectId::new(),
            name,
        })
    }

    /// Returns `true` if this project's name equals `name`, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Returns `true` if `needle` (already lowercased) occurs in the name,
    /// ignoring case.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Trims a project name, returning `None` if nothing is left.
pub fn normalize_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

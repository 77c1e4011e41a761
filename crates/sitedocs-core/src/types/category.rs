//! The closed set of document categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Classification of an uploaded document, used purely for grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Technical specifications.
    #[default]
    Specification,

    /// Scope of work.
    Scope,

    /// Blueprints.
    Blueprint,

    /// Architectural designs.
    Architectural,

    /// Change orders.
    ChangeOrder,

    /// Anything else.
    Other,
}

impl DocumentCategory {
    /// Every category, in display order.
    pub const ALL: [DocumentCategory; 6] = [
        DocumentCategory::Specification,
        DocumentCategory::Scope,
        DocumentCategory::Blueprint,
        DocumentCategory::Architectural,
        DocumentCategory::ChangeOrder,
        DocumentCategory::Other,
    ];

    /// Wire value used in forms and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Specification => "specification",
            DocumentCategory::Scope => "scope",
            DocumentCategory::Blueprint => "blueprint",
            DocumentCategory::Architectural => "architectural",
            DocumentCategory::ChangeOrder => "change_order",
            DocumentCategory::Other => "other",
        }
    }

    /// Section heading shown on the project screen.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Specification => "Specifications",
            DocumentCategory::Scope => "Scope of Work",
            DocumentCategory::Blueprint => "Blueprints",
            DocumentCategory::Architectural => "Architectural Designs",
            DocumentCategory::ChangeOrder => "Change Orders",
            DocumentCategory::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DocumentCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::invalid_category(s))
    }
}

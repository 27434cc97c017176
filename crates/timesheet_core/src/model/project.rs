//! Project record and draft.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Project that time can be logged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    /// Optional free text; empty when omitted.
    pub description: String,
}

impl Project {
    pub(crate) fn from_draft(id: RecordId, draft: &ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
        }
    }
}

/// Unsubmitted project form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
}

impl ProjectDraft {
    /// Creates a draft with an empty description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

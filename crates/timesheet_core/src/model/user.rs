//! User record and draft.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Avatar path used when a draft does not provide a profile picture.
pub const PLACEHOLDER_PROFILE_PICTURE: &str = "/api/placeholder/64/64";

/// Registered operator who can log time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub full_name: String,
    pub position: String,
    /// URL or path; rendering is left to the view layer.
    pub profile_picture: String,
}

impl User {
    /// Builds the persisted record from a validated draft.
    pub(crate) fn from_draft(id: RecordId, draft: &UserDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name.clone(),
            position: draft.position.clone(),
            profile_picture: draft.profile_picture.clone(),
        }
    }
}

/// Unsubmitted user form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub full_name: String,
    pub position: String,
    pub profile_picture: String,
}

impl UserDraft {
    /// Creates a draft with the placeholder profile picture.
    pub fn new(full_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            profile_picture: PLACEHOLDER_PROFILE_PICTURE.to_string(),
        }
    }

    pub fn with_profile_picture(mut self, profile_picture: impl Into<String>) -> Self {
        self.profile_picture = profile_picture.into();
        self
    }
}

impl Default for UserDraft {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

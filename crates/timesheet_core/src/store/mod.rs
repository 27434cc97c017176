//! Entity store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own the three ordered collections (users, projects, time entries).
//! - Gate every insert behind draft validation and assign fresh ids.
//!
//! # Invariants
//! - Writes must run the matching `validate_*_draft` before mutating.
//! - A rejected write leaves every collection untouched.
//! - Every mutation builds a new collection; published snapshots are never
//!   changed in place.

pub mod entity_store;
pub mod seed;

use crate::model::project::Project;
use crate::model::time_entry::TimeEntry;
use crate::model::user::User;
use crate::validation::DraftValidationError;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store write error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(DraftValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<DraftValidationError> for StoreError {
    fn from(value: DraftValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Point-in-time view of all three collections.
///
/// Cloning is cheap: collections are shared, immutable slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub users: Arc<[User]>,
    pub projects: Arc<[Project]>,
    pub time_entries: Arc<[TimeEntry]>,
}

impl StoreSnapshot {
    /// Sum of all time entries whose hours parse as a number.
    pub fn total_hours(&self) -> f64 {
        self.time_entries
            .iter()
            .filter_map(TimeEntry::hours_value)
            .sum()
    }
}

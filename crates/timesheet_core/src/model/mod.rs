//! Timesheet domain model.
//!
//! # Responsibility
//! - Define the persisted record shapes (`User`, `Project`, `TimeEntry`).
//! - Define the caller-supplied draft shapes used before validation.
//!
//! # Invariants
//! - Every record carries a `RecordId` unique within its collection.
//! - Records are never mutated after insertion.
//! - `TimeEntry` references users and projects by name snapshot, not by id.

pub mod project;
pub mod time_entry;
pub mod user;

/// Identifier assigned to every persisted record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = u64;

/// Entity kinds held by the store, one per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Project,
    TimeEntry,
}

impl EntityKind {
    /// Stable lowercase label used in logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
            Self::TimeEntry => "time_entry",
        }
    }
}

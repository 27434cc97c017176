//! Required-field rules for drafts.
//!
//! # Responsibility
//! - Decide whether a draft may be inserted.
//! - Name the first failing field so callers can point the operator at it.
//!
//! # Invariants
//! - A required field fails when it is empty or whitespace only.
//! - No format checks on dates and no range checks on hours.
//! - Predicates are pure: they never touch the store.

use crate::model::project::ProjectDraft;
use crate::model::time_entry::TimeEntryDraft;
use crate::model::user::UserDraft;
use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Draft rejection reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },
}

impl DraftValidationError {
    /// Field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } => *field,
        }
    }

    /// Entity kind whose draft failed validation.
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::MissingField { entity, .. } => *entity,
        }
    }
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{} field `{field}` is required", entity.label())
            }
        }
    }
}

impl Error for DraftValidationError {}

pub type ValidationResult = Result<(), DraftValidationError>;

/// Requires `full_name` and `position`.
pub fn validate_user_draft(draft: &UserDraft) -> ValidationResult {
    require(EntityKind::User, "full_name", &draft.full_name)?;
    require(EntityKind::User, "position", &draft.position)
}

/// Requires `title`; `description` is optional.
pub fn validate_project_draft(draft: &ProjectDraft) -> ValidationResult {
    require(EntityKind::Project, "title", &draft.title)
}

/// Requires `user`, `project`, `date` and `hours`; `notes` is optional.
pub fn validate_time_entry_draft(draft: &TimeEntryDraft) -> ValidationResult {
    require(EntityKind::TimeEntry, "user", &draft.user)?;
    require(EntityKind::TimeEntry, "project", &draft.project)?;
    require(EntityKind::TimeEntry, "date", &draft.date)?;
    require(EntityKind::TimeEntry, "hours", &draft.hours)
}

fn require(entity: EntityKind, field: &'static str, value: &str) -> ValidationResult {
    if is_blank(value) {
        return Err(DraftValidationError::MissingField { entity, field });
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{is_blank, validate_time_entry_draft, DraftValidationError};
    use crate::model::time_entry::TimeEntryDraft;
    use crate::model::EntityKind;

    #[test]
    fn is_blank_treats_whitespace_as_empty() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn time_entry_reports_first_missing_field_in_form_order() {
        let draft = TimeEntryDraft::new("John Doe", " ", "", "");
        let err = validate_time_entry_draft(&draft).unwrap_err();
        assert_eq!(
            err,
            DraftValidationError::MissingField {
                entity: EntityKind::TimeEntry,
                field: "project",
            }
        );
        assert_eq!(err.to_string(), "time_entry field `project` is required");
    }
}

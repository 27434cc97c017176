//! Time entry record and draft.
//!
//! # Invariants
//! - `user` and `project` are name snapshots taken at entry time. Later
//!   changes to the referenced user or project never touch existing entries.
//! - `hours` keeps the text exactly as entered; the store never clamps it.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Logged block of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: RecordId,
    /// Full name of the user at entry time.
    pub user: String,
    /// Title of the project at entry time.
    pub project: String,
    /// Calendar date, conventionally `YYYY-MM-DD`. Not format-checked.
    pub date: String,
    /// Decimal hours as entered, conventionally in 0.5 steps.
    pub hours: String,
    pub notes: String,
}

impl TimeEntry {
    pub(crate) fn from_draft(id: RecordId, draft: &TimeEntryDraft) -> Self {
        Self {
            id,
            user: draft.user.clone(),
            project: draft.project.clone(),
            date: draft.date.clone(),
            hours: draft.hours.clone(),
            notes: draft.notes.clone(),
        }
    }

    /// Parses `hours` as a decimal number.
    ///
    /// Returns `None` when the stored text is not numeric.
    pub fn hours_value(&self) -> Option<f64> {
        self.hours.trim().parse::<f64>().ok()
    }
}

/// Unsubmitted time entry form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeEntryDraft {
    pub user: String,
    pub project: String,
    pub date: String,
    pub hours: String,
    pub notes: String,
}

impl TimeEntryDraft {
    /// Creates a draft with every required field set and empty notes.
    pub fn new(
        user: impl Into<String>,
        project: impl Into<String>,
        date: impl Into<String>,
        hours: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            project: project.into(),
            date: date.into(),
            hours: hours.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeEntry, TimeEntryDraft};

    fn entry_with_hours(hours: &str) -> TimeEntry {
        TimeEntry::from_draft(7, &TimeEntryDraft::new("u", "p", "2024-01-15", hours))
    }

    #[test]
    fn hours_value_parses_decimal_text() {
        assert_eq!(entry_with_hours("4").hours_value(), Some(4.0));
        assert_eq!(entry_with_hours(" 1.5 ").hours_value(), Some(1.5));
    }

    #[test]
    fn hours_value_is_none_for_non_numeric_text() {
        assert_eq!(entry_with_hours("half a day").hours_value(), None);
    }
}

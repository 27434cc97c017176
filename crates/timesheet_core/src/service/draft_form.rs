//! View-local draft state.
//!
//! # Responsibility
//! - Hold unsubmitted form input for one entity kind.
//! - Submit through the session and reset on success.
//!
//! # Invariants
//! - Validation runs before any session mutator is called.
//! - A successful submit resets the draft to its blank state.
//! - A failed submit keeps the draft so the operator can correct it.

use crate::model::project::{Project, ProjectDraft};
use crate::model::time_entry::{TimeEntry, TimeEntryDraft};
use crate::model::user::{User, UserDraft};
use crate::service::session::SessionContext;
use crate::store::entity_store::EntityStore;
use crate::store::StoreResult;
use crate::validation::{
    validate_project_draft, validate_time_entry_draft, validate_user_draft, ValidationResult,
};

/// Draft kinds a `DraftForm` can hold.
pub trait FormDraft: Clone + Default {
    type Record;

    fn validate(&self) -> ValidationResult;

    /// Calls the matching session mutator.
    fn create<S: EntityStore>(&self, session: &mut SessionContext<S>) -> StoreResult<Self::Record>;
}

impl FormDraft for UserDraft {
    type Record = User;

    fn validate(&self) -> ValidationResult {
        validate_user_draft(self)
    }

    fn create<S: EntityStore>(&self, session: &mut SessionContext<S>) -> StoreResult<User> {
        session.add_user(self)
    }
}

impl FormDraft for ProjectDraft {
    type Record = Project;

    fn validate(&self) -> ValidationResult {
        validate_project_draft(self)
    }

    fn create<S: EntityStore>(&self, session: &mut SessionContext<S>) -> StoreResult<Project> {
        session.add_project(self)
    }
}

impl FormDraft for TimeEntryDraft {
    type Record = TimeEntry;

    fn validate(&self) -> ValidationResult {
        validate_time_entry_draft(self)
    }

    fn create<S: EntityStore>(&self, session: &mut SessionContext<S>) -> StoreResult<TimeEntry> {
        session.add_time_entry(self)
    }
}

/// Form state owned by a single view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm<D: FormDraft> {
    draft: D,
}

impl<D: FormDraft> DraftForm<D> {
    pub fn new() -> Self {
        Self { draft: D::default() }
    }

    /// Starts from pre-filled input.
    pub fn with_draft(draft: D) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Validates, creates the record and clears the draft.
    pub fn submit<S: EntityStore>(
        &mut self,
        session: &mut SessionContext<S>,
    ) -> StoreResult<D::Record> {
        self.draft.validate()?;
        let record = self.draft.create(session)?;
        self.cancel();
        Ok(record)
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        self.draft = D::default();
    }
}

#[cfg(test)]
mod tests {
    use super::DraftForm;
    use crate::model::project::ProjectDraft;
    use crate::service::session::SessionContext;

    #[test]
    fn cancel_discards_input_without_touching_session() {
        let mut session = SessionContext::new();
        let mut form: DraftForm<ProjectDraft> = DraftForm::new();
        form.draft_mut().title = "Project C".to_string();

        form.cancel();

        assert!(form.draft().title.is_empty());
        assert_eq!(session.list_projects().len(), 2);
        assert!(form.submit(&mut session).is_err());
        assert_eq!(session.revision(), 0);
    }
}

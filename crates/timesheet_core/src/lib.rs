//! Core domain logic for the timesheet tool.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod id;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use config::RuntimeConfig;
pub use id::IdGenerator;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectDraft};
pub use model::time_entry::{TimeEntry, TimeEntryDraft};
pub use model::user::{User, UserDraft, PLACEHOLDER_PROFILE_PICTURE};
pub use model::{EntityKind, RecordId};
pub use service::draft_form::{DraftForm, FormDraft};
pub use service::session::{
    ChangeKind, SessionContext, SessionEvent, SessionListener, SubscriptionId,
};
pub use store::entity_store::{EntityStore, InMemoryEntityStore};
pub use store::{StoreError, StoreResult, StoreSnapshot};
pub use validation::{
    validate_project_draft, validate_time_entry_draft, validate_user_draft, DraftValidationError,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

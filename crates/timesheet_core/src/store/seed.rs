//! Seed records present when a session starts.

use crate::model::project::ProjectDraft;
use crate::model::user::UserDraft;
use crate::store::entity_store::EntityStore;
use log::error;

/// Seed users in insertion order.
pub fn seed_users() -> Vec<UserDraft> {
    vec![
        UserDraft::new("John Doe", "Developer"),
        UserDraft::new("Jane Smith", "Manager"),
    ]
}

/// Seed projects in insertion order.
pub fn seed_projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft::new("Project A").with_description("Website redesign"),
        ProjectDraft::new("Project B").with_description("Mobile app"),
    ]
}

/// Inserts the seed users and projects. No time entries are seeded.
pub(crate) fn apply(store: &mut impl EntityStore) {
    for draft in seed_users() {
        if let Err(err) = store.add_user(&draft) {
            error!("event=seed_failed module=store status=error kind=user error={err}");
        }
    }
    for draft in seed_projects() {
        if let Err(err) = store.add_project(&draft) {
            error!("event=seed_failed module=store status=error kind=project error={err}");
        }
    }
}

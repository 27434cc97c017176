//! Entity store trait and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/list APIs for users and projects, and create/list/remove
//!   for time entries.
//! - Keep insertion order as display order.
//!
//! # Invariants
//! - Ids come from one `IdGenerator` per store, so they never repeat.
//! - `remove_time_entry` is idempotent; a missing id is not an error.

use crate::id::IdGenerator;
use crate::model::project::{Project, ProjectDraft};
use crate::model::time_entry::{TimeEntry, TimeEntryDraft};
use crate::model::user::{User, UserDraft};
use crate::model::RecordId;
use crate::store::seed;
use crate::store::{StoreResult, StoreSnapshot};
use crate::validation::{validate_project_draft, validate_time_entry_draft, validate_user_draft};
use log::{info, warn};
use std::sync::Arc;

/// Store interface for timesheet records.
pub trait EntityStore {
    fn add_user(&mut self, draft: &UserDraft) -> StoreResult<User>;
    fn add_project(&mut self, draft: &ProjectDraft) -> StoreResult<Project>;
    fn add_time_entry(&mut self, draft: &TimeEntryDraft) -> StoreResult<TimeEntry>;
    /// Removes the entry with `id`, returning it when one matched.
    fn remove_time_entry(&mut self, id: RecordId) -> Option<TimeEntry>;
    fn list_users(&self) -> Arc<[User]>;
    fn list_projects(&self) -> Arc<[Project]>;
    fn list_time_entries(&self) -> Arc<[TimeEntry]>;

    /// Returns all three collections at once.
    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            users: self.list_users(),
            projects: self.list_projects(),
            time_entries: self.list_time_entries(),
        }
    }

    fn find_time_entry(&self, id: RecordId) -> Option<TimeEntry> {
        self.list_time_entries()
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }
}

/// Volatile store; all state is lost when it is dropped.
#[derive(Debug)]
pub struct InMemoryEntityStore {
    ids: IdGenerator,
    users: Arc<[User]>,
    projects: Arc<[Project]>,
    time_entries: Arc<[TimeEntry]>,
}

impl InMemoryEntityStore {
    /// Creates a store with empty collections.
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
            users: Arc::from(Vec::new()),
            projects: Arc::from(Vec::new()),
            time_entries: Arc::from(Vec::new()),
        }
    }

    /// Creates a store holding the two seed users and two seed projects.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        seed::apply(&mut store);
        store
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore for InMemoryEntityStore {
    fn add_user(&mut self, draft: &UserDraft) -> StoreResult<User> {
        if let Err(err) = validate_user_draft(draft) {
            warn!(
                "event=user_rejected module=store status=invalid field={}",
                err.field()
            );
            return Err(err.into());
        }

        let user = User::from_draft(self.ids.next_id(), draft);
        self.users = appended(&self.users, user.clone());
        info!(
            "event=user_created module=store status=ok id={} count={}",
            user.id,
            self.users.len()
        );
        Ok(user)
    }

    fn add_project(&mut self, draft: &ProjectDraft) -> StoreResult<Project> {
        if let Err(err) = validate_project_draft(draft) {
            warn!(
                "event=project_rejected module=store status=invalid field={}",
                err.field()
            );
            return Err(err.into());
        }

        let project = Project::from_draft(self.ids.next_id(), draft);
        self.projects = appended(&self.projects, project.clone());
        info!(
            "event=project_created module=store status=ok id={} count={}",
            project.id,
            self.projects.len()
        );
        Ok(project)
    }

    fn add_time_entry(&mut self, draft: &TimeEntryDraft) -> StoreResult<TimeEntry> {
        if let Err(err) = validate_time_entry_draft(draft) {
            warn!(
                "event=time_entry_rejected module=store status=invalid field={}",
                err.field()
            );
            return Err(err.into());
        }

        let entry = TimeEntry::from_draft(self.ids.next_id(), draft);
        self.time_entries = appended(&self.time_entries, entry.clone());
        info!(
            "event=time_entry_created module=store status=ok id={} count={}",
            entry.id,
            self.time_entries.len()
        );
        Ok(entry)
    }

    fn remove_time_entry(&mut self, id: RecordId) -> Option<TimeEntry> {
        let position = self.time_entries.iter().position(|entry| entry.id == id)?;
        let removed = self.time_entries[position].clone();
        self.time_entries = self
            .time_entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        info!(
            "event=time_entry_removed module=store status=ok id={} count={}",
            id,
            self.time_entries.len()
        );
        Some(removed)
    }

    fn list_users(&self) -> Arc<[User]> {
        Arc::clone(&self.users)
    }

    fn list_projects(&self) -> Arc<[Project]> {
        Arc::clone(&self.projects)
    }

    fn list_time_entries(&self) -> Arc<[TimeEntry]> {
        Arc::clone(&self.time_entries)
    }
}

fn appended<T: Clone>(items: &Arc<[T]>, item: T) -> Arc<[T]> {
    items.iter().cloned().chain(std::iter::once(item)).collect()
}

//! Shared session context.
//!
//! # Responsibility
//! - Own the entity store for the lifetime of a session.
//! - Expose snapshots and mutators to every consumer view.
//! - Notify subscribed listeners after each successful mutation.
//!
//! # Invariants
//! - Listeners run synchronously, in subscription order, before the mutator
//!   returns. Every listener observes a mutation before the next one applies.
//! - Rejected writes and no-op removals publish nothing.
//! - Only the latest snapshot is delivered; there is no buffering or replay.

use crate::model::project::{Project, ProjectDraft};
use crate::model::time_entry::{TimeEntry, TimeEntryDraft};
use crate::model::user::{User, UserDraft};
use crate::model::{EntityKind, RecordId};
use crate::store::entity_store::{EntityStore, InMemoryEntityStore};
use crate::store::{StoreResult, StoreSnapshot};
use log::debug;
use std::sync::Arc;

/// What a published mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Removed,
}

/// Notification delivered to listeners after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEvent {
    /// Session revision after the mutation.
    pub revision: u64,
    /// Collection that changed.
    pub kind: EntityKind,
    pub change: ChangeKind,
    /// Id of the created or removed record.
    pub id: RecordId,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Observer contract for consumer views.
pub trait SessionListener: Send + Sync {
    fn on_change(&self, event: &SessionEvent, snapshot: &StoreSnapshot);
}

impl<F> SessionListener for F
where
    F: Fn(&SessionEvent, &StoreSnapshot) + Send + Sync,
{
    fn on_change(&self, event: &SessionEvent, snapshot: &StoreSnapshot) {
        self(event, snapshot)
    }
}

/// Single-writer, many-reader session over an entity store.
pub struct SessionContext<S: EntityStore = InMemoryEntityStore> {
    store: S,
    listeners: Vec<(SubscriptionId, Arc<dyn SessionListener>)>,
    next_subscription: u64,
    revision: u64,
}

impl SessionContext<InMemoryEntityStore> {
    /// Creates a session over a seeded in-memory store.
    pub fn new() -> Self {
        Self::with_store(InMemoryEntityStore::seeded())
    }
}

impl Default for SessionContext<InMemoryEntityStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntityStore> SessionContext<S> {
    /// Creates a session over the provided store implementation.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            listeners: Vec::new(),
            next_subscription: 1,
            revision: 0,
        }
    }

    /// Registers a listener; it receives every later mutation.
    pub fn subscribe(&mut self, listener: Arc<dyn SessionListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of mutations published since the session started.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn list_users(&self) -> Arc<[User]> {
        self.store.list_users()
    }

    pub fn list_projects(&self) -> Arc<[Project]> {
        self.store.list_projects()
    }

    pub fn list_time_entries(&self) -> Arc<[TimeEntry]> {
        self.store.list_time_entries()
    }

    /// User names a time entry form offers, in insertion order.
    pub fn user_options(&self) -> Vec<String> {
        self.store
            .list_users()
            .iter()
            .map(|user| user.full_name.clone())
            .collect()
    }

    /// Project titles a time entry form offers, in insertion order.
    pub fn project_options(&self) -> Vec<String> {
        self.store
            .list_projects()
            .iter()
            .map(|project| project.title.clone())
            .collect()
    }

    pub fn add_user(&mut self, draft: &UserDraft) -> StoreResult<User> {
        let user = self.store.add_user(draft)?;
        self.publish(EntityKind::User, ChangeKind::Created, user.id);
        Ok(user)
    }

    pub fn add_project(&mut self, draft: &ProjectDraft) -> StoreResult<Project> {
        let project = self.store.add_project(draft)?;
        self.publish(EntityKind::Project, ChangeKind::Created, project.id);
        Ok(project)
    }

    pub fn add_time_entry(&mut self, draft: &TimeEntryDraft) -> StoreResult<TimeEntry> {
        let entry = self.store.add_time_entry(draft)?;
        self.publish(EntityKind::TimeEntry, ChangeKind::Created, entry.id);
        Ok(entry)
    }

    /// Removes a time entry by id. A missing id is a silent no-op.
    pub fn remove_time_entry(&mut self, id: RecordId) -> Option<TimeEntry> {
        let removed = self.store.remove_time_entry(id)?;
        self.publish(EntityKind::TimeEntry, ChangeKind::Removed, removed.id);
        Some(removed)
    }

    fn publish(&mut self, kind: EntityKind, change: ChangeKind, id: RecordId) {
        self.revision += 1;
        let event = SessionEvent {
            revision: self.revision,
            kind,
            change,
            id,
        };
        let snapshot = self.store.snapshot();
        for (_, listener) in &self.listeners {
            listener.on_change(&event, &snapshot);
        }
        debug!(
            "event=session_published module=session status=ok revision={} kind={} listeners={}",
            self.revision,
            kind.label(),
            self.listeners.len()
        );
    }
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Own the one root session for the process and expose its snapshot and
//!   mutators to Dart via FRB.
//! - Flatten core results into simple envelopes for the view layer.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call sees the mutations of all earlier calls.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use timesheet_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Project, ProjectDraft, RuntimeConfig, SessionContext, TimeEntry, TimeEntryDraft, User,
    UserDraft,
};

static SESSION: OnceLock<Mutex<SessionContext>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Initializes logging from `TIMESHEET_LOG_LEVEL` / `TIMESHEET_LOG_DIR`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_from_env() -> String {
    let config = RuntimeConfig::from_env();
    match config.log_dir_str() {
        Some(dir) => init_logging(config.log_level.clone(), dir.to_string()),
        None => "log_dir is not valid UTF-8".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserItem {
    pub id: u64,
    pub full_name: String,
    pub position: String,
    pub profile_picture: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryItem {
    pub id: u64,
    pub user: String,
    pub project: String,
    pub date: String,
    pub hours: String,
    pub notes: String,
}

/// Full read model for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetSnapshot {
    pub users: Vec<UserItem>,
    pub projects: Vec<ProjectItem>,
    pub time_entries: Vec<TimeEntryItem>,
    /// Session revision the snapshot was taken at.
    pub revision: u64,
}

/// Generic action response envelope for mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetActionResponse {
    pub ok: bool,
    /// Created or removed record id.
    pub record_id: Option<u64>,
    pub message: String,
}

impl TimesheetActionResponse {
    fn success(message: impl Into<String>, record_id: u64) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current users, projects and time entries.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_snapshot() -> TimesheetSnapshot {
    let session = lock_session();
    let snapshot = session.snapshot();
    TimesheetSnapshot {
        users: snapshot.users.iter().map(to_user_item).collect(),
        projects: snapshot.projects.iter().map(to_project_item).collect(),
        time_entries: snapshot.time_entries.iter().map(to_time_entry_item).collect(),
        revision: session.revision(),
    }
}

/// Registers a user. `profile_picture = None` keeps the placeholder avatar.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_add_user(
    full_name: String,
    position: String,
    profile_picture: Option<String>,
) -> TimesheetActionResponse {
    let mut draft = UserDraft::new(full_name, position);
    if let Some(picture) = profile_picture.filter(|value| !value.trim().is_empty()) {
        draft = draft.with_profile_picture(picture);
    }
    match lock_session().add_user(&draft) {
        Ok(user) => TimesheetActionResponse::success("User created.", user.id),
        Err(err) => TimesheetActionResponse::failure(format!("timesheet_add_user failed: {err}")),
    }
}

/// Registers a project. `description = None` stores an empty description.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_add_project(title: String, description: Option<String>) -> TimesheetActionResponse {
    let draft = ProjectDraft::new(title).with_description(description.unwrap_or_default());
    match lock_session().add_project(&draft) {
        Ok(project) => TimesheetActionResponse::success("Project created.", project.id),
        Err(err) => {
            TimesheetActionResponse::failure(format!("timesheet_add_project failed: {err}"))
        }
    }
}

/// Logs a time entry against a user and project by name.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_add_time_entry(
    user: String,
    project: String,
    date: String,
    hours: String,
    notes: Option<String>,
) -> TimesheetActionResponse {
    let draft =
        TimeEntryDraft::new(user, project, date, hours).with_notes(notes.unwrap_or_default());
    match lock_session().add_time_entry(&draft) {
        Ok(entry) => TimesheetActionResponse::success("Time entry created.", entry.id),
        Err(err) => {
            TimesheetActionResponse::failure(format!("timesheet_add_time_entry failed: {err}"))
        }
    }
}

/// Removes a time entry. Removing an unknown id still reports `ok`.
#[flutter_rust_bridge::frb(sync)]
pub fn timesheet_remove_time_entry(id: u64) -> TimesheetActionResponse {
    match lock_session().remove_time_entry(id) {
        Some(entry) => TimesheetActionResponse::success("Time entry removed.", entry.id),
        None => TimesheetActionResponse {
            ok: true,
            record_id: None,
            message: "No matching time entry.".to_string(),
        },
    }
}

fn lock_session() -> MutexGuard<'static, SessionContext> {
    let session = SESSION.get_or_init(|| Mutex::new(SessionContext::new()));
    match session.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("event=session_lock_poisoned module=ffi status=recovered");
            poisoned.into_inner()
        }
    }
}

fn to_user_item(user: &User) -> UserItem {
    UserItem {
        id: user.id,
        full_name: user.full_name.clone(),
        position: user.position.clone(),
        profile_picture: user.profile_picture.clone(),
    }
}

fn to_project_item(project: &Project) -> ProjectItem {
    ProjectItem {
        id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
    }
}

fn to_time_entry_item(entry: &TimeEntry) -> TimeEntryItem {
    TimeEntryItem {
        id: entry.id,
        user: entry.user.clone(),
        project: entry.project.clone(),
        date: entry.date.clone(),
        hours: entry.hours.clone(),
        notes: entry.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, timesheet_add_project, timesheet_add_time_entry,
        timesheet_add_user, timesheet_remove_time_entry, timesheet_snapshot,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/timesheet-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn snapshot_contains_seed_records() {
        let snapshot = timesheet_snapshot();
        assert!(snapshot.users.iter().any(|user| user.full_name == "John Doe"));
        assert!(snapshot.projects.iter().any(|project| project.title == "Project B"));
    }

    #[test]
    fn add_user_defaults_profile_picture() {
        let name = unique_token("user");
        let response = timesheet_add_user(name.clone(), "Tester".to_string(), None);
        assert!(response.ok, "{}", response.message);

        let snapshot = timesheet_snapshot();
        let user = snapshot
            .users
            .iter()
            .find(|user| user.full_name == name)
            .expect("created user should be listed");
        assert_eq!(user.profile_picture, "/api/placeholder/64/64");
    }

    #[test]
    fn add_project_and_time_entry_then_remove_twice() {
        let title = unique_token("project");
        let project = timesheet_add_project(title.clone(), None);
        assert!(project.ok, "{}", project.message);

        let entry = timesheet_add_time_entry(
            "John Doe".to_string(),
            title,
            "2024-01-15".to_string(),
            "2.5".to_string(),
            None,
        );
        assert!(entry.ok, "{}", entry.message);
        let entry_id = entry.record_id.expect("created entry should return id");

        let removed = timesheet_remove_time_entry(entry_id);
        assert_eq!(removed.record_id, Some(entry_id));
        let again = timesheet_remove_time_entry(entry_id);
        assert!(again.ok);
        assert_eq!(again.record_id, None);
        assert!(timesheet_snapshot()
            .time_entries
            .iter()
            .all(|item| item.id != entry_id));
    }

    #[test]
    fn add_time_entry_rejects_blank_hours() {
        let response = timesheet_add_time_entry(
            "John Doe".to_string(),
            "Project A".to_string(),
            "2024-01-15".to_string(),
            "  ".to_string(),
            None,
        );
        assert!(!response.ok);
        assert!(response.message.contains("hours"));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}

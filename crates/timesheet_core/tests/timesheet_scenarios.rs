use timesheet_core::{DraftForm, ProjectDraft, SessionContext, TimeEntryDraft};

#[test]
fn submitting_a_time_entry_from_seed_state() {
    let mut session = SessionContext::new();
    assert_eq!(session.list_users().len(), 2);
    assert_eq!(session.list_projects().len(), 2);
    assert!(session.list_time_entries().is_empty());

    let draft = TimeEntryDraft::new("John Doe", "Project A", "2024-01-15", "4")
        .with_notes("design review");
    let entry = session.add_time_entry(&draft).unwrap();

    let entries = session.list_time_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], entry);
    assert_eq!(entry.user, "John Doe");
    assert_eq!(entry.project, "Project A");
    assert_eq!(entry.date, "2024-01-15");
    assert_eq!(entry.hours, "4");
    assert_eq!(entry.notes, "design review");

    let seed_ids: Vec<_> = session
        .list_users()
        .iter()
        .map(|user| user.id)
        .chain(session.list_projects().iter().map(|project| project.id))
        .collect();
    assert!(!seed_ids.contains(&entry.id));
}

#[test]
fn time_entry_with_empty_hours_is_rejected() {
    let mut session = SessionContext::new();
    let mut form = DraftForm::with_draft(
        TimeEntryDraft::new("John Doe", "Project A", "2024-01-15", "").with_notes("no hours"),
    );

    assert!(form.submit(&mut session).is_err());
    assert!(session.list_time_entries().is_empty());
}

#[test]
fn new_project_without_description_can_be_referenced_immediately() {
    let mut session = SessionContext::new();

    let project = session
        .add_project(&ProjectDraft::new("Project C").with_description(""))
        .unwrap();
    assert_eq!(project.description, "");
    assert!(session.project_options().contains(&"Project C".to_string()));

    let entry = session
        .add_time_entry(&TimeEntryDraft::new("Jane Smith", "Project C", "2024-02-01", "1.5"))
        .unwrap();
    assert_eq!(entry.project, "Project C");
    assert_eq!(session.list_time_entries().len(), 1);
}

#[test]
fn entries_keep_name_snapshots_and_total_hours() {
    let mut session = SessionContext::new();
    for (user, hours) in [("John Doe", "2"), ("Jane Smith", "1.5"), ("Nobody Yet", "n/a")] {
        session
            .add_time_entry(&TimeEntryDraft::new(user, "Project B", "2024-03-01", hours))
            .unwrap();
    }

    let snapshot = session.snapshot();
    assert_eq!(snapshot.time_entries[2].user, "Nobody Yet");
    assert_eq!(snapshot.total_hours(), 3.5);
}

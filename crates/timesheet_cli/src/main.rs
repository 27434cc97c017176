//! Line-driven timesheet shell.
//!
//! # Responsibility
//! - Wire runtime config and logging, then build the root session.
//! - Replay commands from stdin and print the resulting state.

mod command;

use command::{parse_line, Command, USAGE};
use log::warn;
use std::io::BufRead;
use std::sync::Arc;
use timesheet_core::{
    init_logging, ChangeKind, RuntimeConfig, SessionContext, SessionEvent, StoreSnapshot,
};

fn main() {
    let config = RuntimeConfig::from_env();
    if let Some(dir) = config.log_dir_str() {
        if let Err(err) = init_logging(&config.log_level, dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut session = SessionContext::new();
    session.subscribe(Arc::new(|event: &SessionEvent, snapshot: &StoreSnapshot| {
        let verb = match event.change {
            ChangeKind::Created => "created",
            ChangeKind::Removed => "removed",
        };
        println!(
            "[rev {}] {verb} {} #{} ({} entries, {:.1}h)",
            event.revision,
            event.kind.label(),
            event.id,
            snapshot.time_entries.len(),
            snapshot.total_hours()
        );
    }));

    println!("timesheet_core version={}", timesheet_core::core_version());
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read stdin: {err}");
                break;
            }
        };
        match parse_line(&line) {
            Ok(Some(command)) => run(&mut session, command),
            Ok(None) => {}
            Err(err) => eprintln!("{err}"),
        }
    }
}

fn run(session: &mut SessionContext, command: Command) {
    let result = match command {
        Command::AddUser(draft) => session.add_user(&draft).map(|_| ()),
        Command::AddProject(draft) => session.add_project(&draft).map(|_| ()),
        Command::AddTimeEntry(draft) => session.add_time_entry(&draft).map(|_| ()),
        Command::RemoveTimeEntry(id) => {
            if session.remove_time_entry(id).is_none() {
                println!("no time entry #{id}");
            }
            Ok(())
        }
        Command::List => {
            print_snapshot(&session.snapshot());
            Ok(())
        }
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    };
    if let Err(err) = result {
        warn!("event=command_rejected module=cli status=invalid");
        eprintln!("rejected: {err}");
    }
}

fn print_snapshot(snapshot: &StoreSnapshot) {
    println!("users:");
    for user in snapshot.users.iter() {
        println!("  #{} {} ({})", user.id, user.full_name, user.position);
    }
    println!("projects:");
    for project in snapshot.projects.iter() {
        println!("  #{} {} - {}", project.id, project.title, project.description);
    }
    println!("time entries:");
    for entry in snapshot.time_entries.iter() {
        println!(
            "  #{} {} - {} | {} | {}h | {}",
            entry.id, entry.user, entry.project, entry.date, entry.hours, entry.notes
        );
    }
}

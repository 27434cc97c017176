//! Line command parsing.
//!
//! Fields after the verb are separated by `|`, so names may contain spaces.

use timesheet_core::{ProjectDraft, RecordId, TimeEntryDraft, UserDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddUser(UserDraft),
    AddProject(ProjectDraft),
    AddTimeEntry(TimeEntryDraft),
    RemoveTimeEntry(RecordId),
    List,
    Help,
}

pub const USAGE: &str = "\
commands:
  user add <full name> | <position>
  project add <title> [| <description>]
  entry add <user> | <project> | <date> | <hours> [| <notes>]
  entry rm <id>
  list
  help";

/// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_verb(line);
    let command = match verb.as_str() {
        "list" => Command::List,
        "help" => Command::Help,
        "user add" => {
            let fields = split_fields(rest);
            Command::AddUser(UserDraft::new(field(&fields, 0), field(&fields, 1)))
        }
        "project add" => {
            let fields = split_fields(rest);
            Command::AddProject(
                ProjectDraft::new(field(&fields, 0)).with_description(field(&fields, 1)),
            )
        }
        "entry add" => {
            let fields = split_fields(rest);
            Command::AddTimeEntry(
                TimeEntryDraft::new(
                    field(&fields, 0),
                    field(&fields, 1),
                    field(&fields, 2),
                    field(&fields, 3),
                )
                .with_notes(field(&fields, 4)),
            )
        }
        "entry rm" => {
            let id = rest
                .trim()
                .parse::<RecordId>()
                .map_err(|_| format!("invalid time entry id `{}`", rest.trim()))?;
            Command::RemoveTimeEntry(id)
        }
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(Some(command))
}

// Verbs are one word (`list`) or two (`entry add`).
fn split_verb(line: &str) -> (String, &str) {
    let mut words = line.splitn(3, char::is_whitespace);
    let first = words.next().unwrap_or_default();
    if matches!(first, "list" | "help") {
        return (first.to_string(), "");
    }
    let second = words.next().unwrap_or_default();
    (format!("{first} {second}"), words.next().unwrap_or_default())
}

fn split_fields(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

fn field(fields: &[&str], index: usize) -> String {
    fields.get(index).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command};
    use timesheet_core::{ProjectDraft, TimeEntryDraft, UserDraft};

    #[test]
    fn parses_user_with_spaces_in_name() {
        let command = parse_line("user add Ada Lovelace | Engineer").unwrap();
        assert_eq!(
            command,
            Some(Command::AddUser(UserDraft::new("Ada Lovelace", "Engineer")))
        );
    }

    #[test]
    fn project_description_is_optional() {
        let command = parse_line("project add Project C").unwrap();
        assert_eq!(
            command,
            Some(Command::AddProject(ProjectDraft::new("Project C")))
        );
    }

    #[test]
    fn parses_time_entry_with_notes() {
        let command =
            parse_line("entry add John Doe | Project A | 2024-01-15 | 4 | design review").unwrap();
        assert_eq!(
            command,
            Some(Command::AddTimeEntry(
                TimeEntryDraft::new("John Doe", "Project A", "2024-01-15", "4")
                    .with_notes("design review")
            ))
        );
    }

    #[test]
    fn missing_fields_become_blank_for_validation() {
        let command = parse_line("entry add John Doe | Project A").unwrap();
        match command {
            Some(Command::AddTimeEntry(draft)) => {
                assert!(draft.date.is_empty());
                assert!(draft.hours.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# seed").unwrap(), None);
    }

    #[test]
    fn rejects_unknown_verbs_and_bad_ids() {
        assert!(parse_line("entry edit 3").is_err());
        assert!(parse_line("entry rm three").is_err());
        assert_eq!(
            parse_line("entry rm 3").unwrap(),
            Some(Command::RemoveTimeEntry(3))
        );
    }
}

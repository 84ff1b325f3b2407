//! Line-oriented command layer.
//!
//! Each command parses the raw input line itself, validates its arguments,
//! and returns the response text. Validation failures are reported before
//! any task-list mutation is attempted, so they never change state.

use crate::error::{Error, Result};
use crate::list::TaskList;

mod add;
mod modify;
mod query;

pub use add::{DeadlineCommand, EventCommand, TodoCommand};
pub use modify::{DeleteCommand, MarkCommand, UnmarkCommand};
pub use query::{FindCommand, ListCommand};

/// Instant format accepted in command input, e.g. `2024-06-01 1430`
pub const INPUT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";
/// Human-readable description of [`INPUT_DATE_TIME_FORMAT`] for error messages
pub const INPUT_DATE_TIME_HINT: &str = "yyyy-mm-dd hhmm";

/// A command runnable against the task list.
pub trait Command {
    /// Parse `input` (the full line, keyword included), apply the command
    /// to `tasks`, and return the response text.
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String>;
}

/// Dispatch one input line to its command by leading keyword.
pub fn dispatch(input: &str, tasks: &mut TaskList) -> Result<String> {
    let input = input.trim();
    let keyword = input.split_whitespace().next().unwrap_or("");
    match keyword {
        "todo" => TodoCommand.run(input, tasks),
        "deadline" => DeadlineCommand.run(input, tasks),
        "event" => EventCommand.run(input, tasks),
        "list" => ListCommand.run(input, tasks),
        "mark" => MarkCommand.run(input, tasks),
        "unmark" => UnmarkCommand.run(input, tasks),
        "delete" => DeleteCommand.run(input, tasks),
        "find" => FindCommand.run(input, tasks),
        "" => Err(Error::InvalidCommand("Say something!".to_string())),
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

/// The input with its leading keyword removed and surrounding space trimmed
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> &'a str {
    let input = input.trim();
    input.strip_prefix(keyword).unwrap_or(input).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::MemStorage;

    pub(super) fn empty_list() -> TaskList {
        TaskList::load(Box::new(MemStorage::new())).expect("load should succeed")
    }

    #[test]
    fn dispatch_rejects_unknown_keywords() {
        let mut tasks = empty_list();
        let err = dispatch("frobnicate everything", &mut tasks).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(word) if word == "frobnicate"));
    }

    #[test]
    fn dispatch_rejects_empty_input() {
        let mut tasks = empty_list();
        assert!(dispatch("   ", &mut tasks).is_err());
    }

    #[test]
    fn dispatch_routes_by_leading_keyword() {
        let mut tasks = empty_list();
        dispatch("todo buy milk", &mut tasks).unwrap();
        assert_eq!(tasks.len(), 1);

        let listing = dispatch("list", &mut tasks).unwrap();
        assert!(listing.contains("1.[T][ ] buy milk"));
    }

    #[test]
    fn strip_keyword_trims_padding() {
        assert_eq!(strip_keyword("  todo   buy milk  ", "todo"), "buy milk");
        assert_eq!(strip_keyword("todo", "todo"), "");
    }
}

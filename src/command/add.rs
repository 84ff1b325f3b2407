//! Commands that create tasks: `todo`, `deadline`, `event`.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::list::TaskList;
use crate::output;
use crate::task::Task;

use super::{strip_keyword, Command, INPUT_DATE_TIME_FORMAT, INPUT_DATE_TIME_HINT};

/// Marker introducing the cutoff instant of a deadline
pub const BY_MARKER: &str = "/by";
/// Marker introducing the start instant of an event
pub const FROM_MARKER: &str = "/from";
/// Marker introducing the end instant of an event
pub const TO_MARKER: &str = "/to";

/// `todo <description>`
pub struct TodoCommand;

impl Command for TodoCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let description = strip_keyword(input, "todo");
        if description.is_empty() {
            return Err(Error::InvalidCommand(
                "The description of a todo cannot be empty!".to_string(),
            ));
        }
        acknowledge_add(tasks, Task::todo(description))
    }
}

/// `deadline <description> /by <date-time>`
pub struct DeadlineCommand;

impl Command for DeadlineCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let rest = strip_keyword(input, "deadline");
        let Some((description, due)) = split_marker(rest, BY_MARKER) else {
            return Err(Error::InvalidCommand(format!(
                "The deadline command format should be:\n  deadline <description> {BY_MARKER} <{INPUT_DATE_TIME_HINT}>"
            )));
        };
        let description = description.trim();
        let due = due.trim();

        if description.is_empty() {
            return Err(Error::InvalidCommand(
                "The description of a deadline cannot be empty!".to_string(),
            ));
        }
        if due.is_empty() {
            return Err(Error::InvalidCommand(
                "The cutoff of a deadline must be specified!".to_string(),
            ));
        }

        let due = parse_instant(due, "The cutoff of the deadline")?;
        acknowledge_add(tasks, Task::deadline(description, due))
    }
}

/// `event <description> /from <date-time> /to <date-time>`
pub struct EventCommand;

impl Command for EventCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let rest = strip_keyword(input, "event");
        let Some((description, tail)) = split_marker(rest, FROM_MARKER) else {
            return Err(event_usage());
        };
        let Some((start, end)) = split_marker(tail, TO_MARKER) else {
            return Err(event_usage());
        };
        let description = description.trim();
        let start = start.trim();
        let end = end.trim();

        if description.is_empty() {
            return Err(Error::InvalidCommand(
                "The description of an event cannot be empty!".to_string(),
            ));
        }
        if start.is_empty() {
            return Err(Error::InvalidCommand(
                "The start of an event must be specified!".to_string(),
            ));
        }
        if end.is_empty() {
            return Err(Error::InvalidCommand(
                "The end of an event must be specified!".to_string(),
            ));
        }

        let start = parse_instant(start, "The start of the event")?;
        let end = parse_instant(end, "The end of the event")?;

        // An end before the start is accepted as given.
        acknowledge_add(tasks, Task::event(description, start, end))
    }
}

fn event_usage() -> Error {
    Error::InvalidCommand(format!(
        "The event command format should be:\n  event <description> {FROM_MARKER} <{INPUT_DATE_TIME_HINT}> {TO_MARKER} <{INPUT_DATE_TIME_HINT}>"
    ))
}

/// Split `text` at the first space-bounded occurrence of `marker`. A marker
/// at the very end of the input yields an empty remainder, so "missing
/// value" errors stay distinct from "missing marker" ones.
fn split_marker<'a>(text: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let bounded = format!(" {marker} ");
    if let Some((head, tail)) = text.split_once(&bounded) {
        return Some((head, tail));
    }
    let suffix = format!(" {marker}");
    text.strip_suffix(&suffix).map(|head| (head, ""))
}

fn parse_instant(text: &str, what: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, INPUT_DATE_TIME_FORMAT).map_err(|_| {
        Error::InvalidCommand(format!(
            "{what} is not a valid date and time; expected {INPUT_DATE_TIME_HINT}, e.g. 2024-06-01 1430"
        ))
    })
}

fn acknowledge_add(tasks: &mut TaskList, task: Task) -> Result<String> {
    let rendered = task.to_string();
    tasks.add(task)?;
    Ok(format!(
        "Got it, I've added this task:\n  {rendered}\n{}",
        output::count_note(tasks.len())
    ))
}

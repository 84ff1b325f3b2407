//! Task kinds and their user-facing rendering.

use std::fmt;

use chrono::NaiveDateTime;

/// Format used when rendering instants back to the user, e.g. `Jun 1 2024 2:30pm`
pub const DISPLAY_DATE_TIME_FORMAT: &str = "%b %-d %Y %-I:%M%P";

/// A tracked unit of work.
///
/// The variant is fixed at construction. `done` is the only field mutated in
/// place; everything else changes by rebuilding the task and replacing it
/// through [`TaskList::update`](crate::list::TaskList::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Plain to-do with no time attached
    Todo { done: bool, description: String },

    /// Work with a cutoff instant
    Deadline {
        done: bool,
        description: String,
        due: NaiveDateTime,
    },

    /// Time-bounded happening; `end` is not required to follow `start`
    Event {
        done: bool,
        description: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Task {
    /// Fresh, not-yet-done todo
    pub fn todo(description: impl Into<String>) -> Self {
        Task::Todo {
            done: false,
            description: description.into(),
        }
    }

    /// Fresh, not-yet-done deadline
    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Task::Deadline {
            done: false,
            description: description.into(),
            due,
        }
    }

    /// Fresh, not-yet-done event
    pub fn event(description: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Task::Event {
            done: false,
            description: description.into(),
            start,
            end,
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Task::Todo { done, .. }
            | Task::Deadline { done, .. }
            | Task::Event { done, .. } => *done,
        }
    }

    pub fn set_done(&mut self, value: bool) {
        match self {
            Task::Todo { done, .. }
            | Task::Deadline { done, .. }
            | Task::Event { done, .. } => *done = value,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Task::Todo { description, .. }
            | Task::Deadline { description, .. }
            | Task::Event { description, .. } => description,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_done() { "X" } else { " " };
        match self {
            Task::Todo { description, .. } => write!(f, "[T][{marker}] {description}"),
            Task::Deadline {
                description, due, ..
            } => write!(
                f,
                "[D][{marker}] {description} (by: {})",
                due.format(DISPLAY_DATE_TIME_FORMAT)
            ),
            Task::Event {
                description,
                start,
                end,
                ..
            } => write!(
                f,
                "[E][{marker}] {description} (from: {} to: {})",
                start.format(DISPLAY_DATE_TIME_FORMAT),
                end.format(DISPLAY_DATE_TIME_FORMAT)
            ),
        }
    }
}

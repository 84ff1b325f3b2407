//! Line codec for the save file.
//!
//! One task per line: a one-character variant tag, the done flag as a
//! `true`/`false` literal, the description, then the variant's instants,
//! joined by `|`. Fields are backslash-escaped so the delimiter and line
//! terminator survive the round trip, and `decode` reports exactly which
//! variant and field of a record is malformed.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::task::Task;

/// Field separator inside a record
pub const FIELD_DELIMITER: char = '|';
/// Escape character inside a field
pub const ESCAPE: char = '\\';
/// Record separator in the blob
pub const RECORD_TERMINATOR: char = '\n';
/// Instant format used inside records, e.g. `2024-06-01T14:30:00`
pub const STORAGE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const TODO_TAG: &str = "T";
const DEADLINE_TAG: &str = "D";
const EVENT_TAG: &str = "E";

const TODO_KIND: &str = "todo";
const DEADLINE_KIND: &str = "deadline";
const EVENT_KIND: &str = "event";

/// Encode one task as a single record line, without the terminator
pub fn encode_task(task: &Task) -> String {
    let fields = match task {
        Task::Todo { done, description } => {
            vec![TODO_TAG.to_string(), done.to_string(), escape(description)]
        }
        Task::Deadline {
            done,
            description,
            due,
        } => vec![
            DEADLINE_TAG.to_string(),
            done.to_string(),
            escape(description),
            escape(&format_instant(*due)),
        ],
        Task::Event {
            done,
            description,
            start,
            end,
        } => vec![
            EVENT_TAG.to_string(),
            done.to_string(),
            escape(description),
            escape(&format_instant(*start)),
            escape(&format_instant(*end)),
        ],
    };
    fields.join(&FIELD_DELIMITER.to_string())
}

/// Encode the whole list in order, one terminated record per task
pub fn encode_list(tasks: &[Task]) -> String {
    let mut blob = String::new();
    for task in tasks {
        blob.push_str(&encode_task(task));
        blob.push(RECORD_TERMINATOR);
    }
    blob
}

/// Decode one record line
pub fn decode_task(line: &str) -> Result<Task> {
    let fields = split_fields(line);
    match fields[0].as_str() {
        TODO_TAG => decode_todo(&fields),
        DEADLINE_TAG => decode_deadline(&fields),
        EVENT_TAG => decode_event(&fields),
        other => Err(Error::UnknownTaskTag(other.to_string())),
    }
}

/// Decode the whole blob, skipping empty lines.
///
/// The first malformed record fails the whole decode; callers never see a
/// partial list.
pub fn decode_list(blob: &str) -> Result<Vec<Task>> {
    blob.split(RECORD_TERMINATOR)
        .filter(|line| !line.is_empty())
        .map(decode_task)
        .collect()
}

fn decode_todo(fields: &[String]) -> Result<Task> {
    check_field_count(TODO_KIND, fields, 3)?;
    Ok(Task::Todo {
        done: parse_done(TODO_KIND, &fields[1])?,
        description: unescape(TODO_KIND, "description", &fields[2])?,
    })
}

fn decode_deadline(fields: &[String]) -> Result<Task> {
    check_field_count(DEADLINE_KIND, fields, 4)?;
    Ok(Task::Deadline {
        done: parse_done(DEADLINE_KIND, &fields[1])?,
        description: unescape(DEADLINE_KIND, "description", &fields[2])?,
        due: parse_instant(DEADLINE_KIND, "due date-time", &fields[3])?,
    })
}

fn decode_event(fields: &[String]) -> Result<Task> {
    check_field_count(EVENT_KIND, fields, 5)?;
    Ok(Task::Event {
        done: parse_done(EVENT_KIND, &fields[1])?,
        description: unescape(EVENT_KIND, "description", &fields[2])?,
        start: parse_instant(EVENT_KIND, "start date-time", &fields[3])?,
        end: parse_instant(EVENT_KIND, "end date-time", &fields[4])?,
    })
}

fn check_field_count(kind: &'static str, fields: &[String], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(Error::CorruptRecord {
            kind,
            field: "field count",
            reason: format!("expected {expected} fields, found {}", fields.len()),
        });
    }
    Ok(())
}

fn parse_done(kind: &'static str, field: &str) -> Result<bool> {
    match field {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::CorruptRecord {
            kind,
            field: "done flag",
            reason: format!("expected true or false, found {other:?}"),
        }),
    }
}

fn parse_instant(kind: &'static str, field: &'static str, raw: &str) -> Result<NaiveDateTime> {
    let text = unescape(kind, field, raw)?;
    NaiveDateTime::parse_from_str(&text, STORAGE_DATE_TIME_FORMAT).map_err(|err| {
        Error::CorruptRecord {
            kind,
            field,
            reason: err.to_string(),
        }
    })
}

fn format_instant(instant: NaiveDateTime) -> String {
    instant.format(STORAGE_DATE_TIME_FORMAT).to_string()
}

/// Escape the delimiter, escape character, and line terminator in a field
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            ESCAPE => {
                out.push(ESCAPE);
                out.push(ESCAPE);
            }
            FIELD_DELIMITER => {
                out.push(ESCAPE);
                out.push(FIELD_DELIMITER);
            }
            RECORD_TERMINATOR => {
                out.push(ESCAPE);
                out.push('n');
            }
            _ => out.push(ch),
        }
    }
    out
}

fn unescape(kind: &'static str, field: &'static str, raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(ESCAPE) => out.push(ESCAPE),
            Some(FIELD_DELIMITER) => out.push(FIELD_DELIMITER),
            Some('n') => out.push(RECORD_TERMINATOR),
            Some(other) => {
                return Err(Error::CorruptRecord {
                    kind,
                    field,
                    reason: format!("unknown escape sequence \\{other}"),
                });
            }
            None => {
                return Err(Error::CorruptRecord {
                    kind,
                    field,
                    reason: "dangling escape at end of field".to_string(),
                });
            }
        }
    }
    Ok(out)
}

/// Split a record line into raw, still-escaped fields on unescaped
/// delimiters. Always yields at least one field.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for ch in line.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == ESCAPE {
            current.push(ch);
            escaped = true;
        } else if ch == FIELD_DELIMITER {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

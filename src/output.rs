//! Shared response-text construction for commands.

use crate::task::Task;

/// One listing line: 1-based position, dot, the task's display form
pub fn numbered_line(position: usize, task: &Task) -> String {
    format!("{position}.{task}")
}

/// Pre-rendered listing lines joined under a header
pub fn listing(header: &str, lines: &[String]) -> String {
    let mut out = String::from(header);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

/// Count note appended to add/delete acknowledgements
pub fn count_note(len: usize) -> String {
    if len == 1 {
        "Now you have 1 task in the list.".to_string()
    } else {
        format!("Now you have {len} tasks in the list.")
    }
}

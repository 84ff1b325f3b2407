//! Commands that change existing tasks: `mark`, `unmark`, `delete`.

use crate::error::{Error, Result};
use crate::list::TaskList;
use crate::output;
use crate::task::Task;

use super::{strip_keyword, Command};

/// `mark <n>` — set the task done
pub struct MarkCommand;

impl Command for MarkCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let index = parse_index(strip_keyword(input, "mark"), "mark", tasks.len())?;
        set_done(tasks, index, true)?;
        Ok(format!(
            "Nice! I've marked this task as done:\n  {}",
            tasks.get(index)
        ))
    }
}

/// `unmark <n>` — set the task not done
pub struct UnmarkCommand;

impl Command for UnmarkCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let index = parse_index(strip_keyword(input, "unmark"), "unmark", tasks.len())?;
        set_done(tasks, index, false)?;
        Ok(format!(
            "OK, I've marked this task as not done yet:\n  {}",
            tasks.get(index)
        ))
    }
}

/// `delete <n>` — remove the task
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let index = parse_index(strip_keyword(input, "delete"), "delete", tasks.len())?;
        let removed = tasks.remove_at(index)?;
        Ok(format!(
            "Noted, I've removed this task:\n  {removed}\n{}",
            output::count_note(tasks.len())
        ))
    }
}

/// Flip `done` by rebuilding the task and replacing it, so the change goes
/// through the same write-through-and-rollback path as every other
/// mutation.
fn set_done(tasks: &mut TaskList, index: usize, done: bool) -> Result<()> {
    let mut task: Task = tasks.get(index).clone();
    task.set_done(done);
    tasks.update(index, task)
}

/// Parse a 1-based task number into a valid 0-based index
fn parse_index(arg: &str, keyword: &str, len: usize) -> Result<usize> {
    if arg.is_empty() {
        return Err(Error::InvalidCommand(format!(
            "Specify which task to {keyword}, e.g. {keyword} 2"
        )));
    }
    let number: usize = arg
        .parse()
        .map_err(|_| Error::InvalidCommand(format!("{arg:?} is not a task number!")))?;
    if number == 0 || number > len {
        return Err(Error::InvalidCommand(format!(
            "Task {number} does not exist; {}",
            match len {
                0 => "the list is empty.".to_string(),
                1 => "the list has 1 task.".to_string(),
                n => format!("the list has {n} tasks."),
            }
        )));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::super::tests::empty_list;
    use super::*;

    fn list_with(names: &[&str]) -> TaskList {
        let mut tasks = empty_list();
        for name in names {
            tasks.add(Task::todo(*name)).unwrap();
        }
        tasks
    }

    #[test]
    fn mark_and_unmark_flip_the_done_flag() {
        let mut tasks = list_with(&["buy milk"]);

        let response = MarkCommand.run("mark 1", &mut tasks).unwrap();
        assert!(response.contains("[T][X] buy milk"));
        assert!(tasks.get(0).is_done());

        let response = UnmarkCommand.run("unmark 1", &mut tasks).unwrap();
        assert!(response.contains("[T][ ] buy milk"));
        assert!(!tasks.get(0).is_done());
    }

    #[test]
    fn delete_removes_and_echoes_the_task() {
        let mut tasks = list_with(&["a", "b", "c"]);

        let response = DeleteCommand.run("delete 2", &mut tasks).unwrap();
        assert!(response.contains("[T][ ] b"));
        assert!(response.contains("Now you have 2 tasks in the list."));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get(1).description(), "c");
    }

    #[test]
    fn index_validation_rejects_bad_input_before_mutating() {
        let mut tasks = list_with(&["only"]);

        assert!(MarkCommand.run("mark", &mut tasks).is_err());
        assert!(MarkCommand.run("mark two", &mut tasks).is_err());
        assert!(MarkCommand.run("mark 0", &mut tasks).is_err());
        assert!(MarkCommand.run("mark 2", &mut tasks).is_err());
        assert!(DeleteCommand.run("delete 99", &mut tasks).is_err());

        assert_eq!(tasks.len(), 1);
        assert!(!tasks.get(0).is_done());
    }
}

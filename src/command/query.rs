//! Read-only commands: `list`, `find`.

use crate::error::{Error, Result};
use crate::list::TaskList;
use crate::output;

use super::{strip_keyword, Command};

/// `list` — number every task in insertion order
pub struct ListCommand;

impl Command for ListCommand {
    fn run(&self, _input: &str, tasks: &mut TaskList) -> Result<String> {
        if tasks.is_empty() {
            return Ok("There are no tasks in your list.".to_string());
        }
        let lines: Vec<String> = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| output::numbered_line(i + 1, task))
            .collect();
        Ok(output::listing("Here are the tasks in your list:", &lines))
    }
}

/// `find <keyphrase>` — literal, case-sensitive substring search over
/// descriptions, keeping the original numbering
pub struct FindCommand;

impl Command for FindCommand {
    fn run(&self, input: &str, tasks: &mut TaskList) -> Result<String> {
        let keyphrase = strip_keyword(input, "find");
        if keyphrase.is_empty() {
            return Err(Error::InvalidCommand(
                "The keyphrase to search for cannot be empty!".to_string(),
            ));
        }
        let lines: Vec<String> = tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().contains(keyphrase))
            .map(|(i, task)| output::numbered_line(i + 1, task))
            .collect();
        if lines.is_empty() {
            return Ok(format!("No tasks match {keyphrase:?}."));
        }
        Ok(output::listing(
            &format!("It seems that there are {} matching tasks:", lines.len()),
            &lines,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::empty_list;
    use super::*;
    use crate::task::Task;

    #[test]
    fn list_reports_an_empty_list() {
        let mut tasks = empty_list();
        assert_eq!(
            ListCommand.run("list", &mut tasks).unwrap(),
            "There are no tasks in your list."
        );
    }

    #[test]
    fn list_numbers_tasks_in_insertion_order() {
        let mut tasks = empty_list();
        tasks.add(Task::todo("first")).unwrap();
        tasks.add(Task::todo("second")).unwrap();

        let response = ListCommand.run("list", &mut tasks).unwrap();
        assert_eq!(
            response,
            "Here are the tasks in your list:\n1.[T][ ] first\n2.[T][ ] second"
        );
    }

    #[test]
    fn find_requires_a_keyphrase() {
        let mut tasks = empty_list();
        assert!(FindCommand.run("find   ", &mut tasks).is_err());
    }

    #[test]
    fn find_is_substring_and_case_sensitive() {
        let mut tasks = empty_list();
        tasks.add(Task::todo("buy milk")).unwrap();
        tasks.add(Task::todo("Buy bread")).unwrap();
        tasks.add(Task::todo("sell milk")).unwrap();

        let milk = FindCommand.run("find milk", &mut tasks).unwrap();
        assert!(milk.contains("1.[T][ ] buy milk"));
        assert!(milk.contains("3.[T][ ] sell milk"));
        assert!(!milk.contains("Buy bread"));

        let buy = FindCommand.run("find Buy", &mut tasks).unwrap();
        assert!(buy.contains("2.[T][ ] Buy bread"));
        assert!(!buy.contains("buy milk"));
    }

    #[test]
    fn find_reports_no_matches() {
        let mut tasks = empty_list();
        tasks.add(Task::todo("buy milk")).unwrap();
        assert_eq!(
            FindCommand.run("find cheese", &mut tasks).unwrap(),
            "No tasks match \"cheese\"."
        );
    }
}

//! The in-memory task list and its write-through persistence.

use tracing::debug;

use crate::error::Result;
use crate::record;
use crate::storage::Storage;
use crate::task::Task;

/// Ordered task collection backed by a [`Storage`].
///
/// Every mutation re-encodes the whole list and writes it through; if the
/// write fails, the in-memory change is undone before the error is
/// returned, so memory and storage never diverge.
pub struct TaskList {
    tasks: Vec<Task>,
    storage: Box<dyn Storage>,
}

impl std::fmt::Debug for TaskList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskList")
            .field("tasks", &self.tasks)
            .finish_non_exhaustive()
    }
}

impl TaskList {
    /// Load the list from existing storage, or create empty storage.
    ///
    /// A malformed save file fails the whole load; no partially populated
    /// list is ever produced.
    pub fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let tasks = if storage.exists()? {
            record::decode_list(&storage.read_all()?)?
        } else {
            storage.create()?;
            Vec::new()
        };
        debug!(tasks = tasks.len(), "task list loaded");
        Ok(Self { tasks, storage })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The command layer validates
    /// user-supplied task numbers before they get here.
    pub fn get(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Append `task` and write through.
    pub fn add(&mut self, task: Task) -> Result<()> {
        self.tasks.push(task);
        self.persist_or_undo(|tasks| {
            tasks.pop();
        })
    }

    /// Remove and return the task at `index`, writing through.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<Task> {
        let task = self.tasks.remove(index);
        self.persist_or_undo(|tasks| tasks.insert(index, task.clone()))?;
        Ok(task)
    }

    /// Replace the task at `index`, writing through.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn update(&mut self, index: usize, task: Task) -> Result<()> {
        let old = std::mem::replace(&mut self.tasks[index], task);
        self.persist_or_undo(move |tasks| tasks[index] = old)
    }

    /// Shared write-through step: persist the whole list, undoing the
    /// caller's in-memory mutation if the write fails. The storage error
    /// is propagated unchanged.
    fn persist_or_undo(&mut self, undo: impl FnOnce(&mut Vec<Task>)) -> Result<()> {
        let blob = record::encode_list(&self.tasks);
        match self.storage.write_all(&blob) {
            Ok(()) => {
                debug!(tasks = self.tasks.len(), bytes = blob.len(), "task list persisted");
                Ok(())
            }
            Err(err) => {
                undo(&mut self.tasks);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::testing::MemStorage;
    use chrono::{NaiveDate, NaiveDateTime};

    fn instant(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn loaded(storage: &MemStorage) -> TaskList {
        TaskList::load(Box::new(storage.clone())).expect("load should succeed")
    }

    #[test]
    fn load_creates_missing_storage() {
        let storage = MemStorage::new();
        let list = loaded(&storage);

        assert!(list.is_empty());
        assert_eq!(storage.blob().as_deref(), Some(""));
    }

    #[test]
    fn load_skips_blank_lines() {
        let storage = MemStorage::with_blob("T|false|one\n\nT|false|two\n\n\n");
        let list = loaded(&storage);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).description(), "one");
        assert_eq!(list.get(1).description(), "two");
    }

    #[test]
    fn corrupt_record_aborts_load() {
        let storage = MemStorage::with_blob("T|false|fine\nT|maybe|broken\n");
        let err = TaskList::load(Box::new(storage)).unwrap_err();
        assert!(matches!(err, Error::CorruptRecord { .. }));
    }

    #[test]
    fn mutations_write_the_encoded_list_through() {
        let storage = MemStorage::new();
        let mut list = loaded(&storage);

        list.add(Task::todo("buy milk")).unwrap();
        list.add(Task::deadline("return book", instant(14, 0)))
            .unwrap();
        assert_eq!(
            storage.blob().unwrap(),
            "T|false|buy milk\nD|false|return book|2024-01-01T14:00:00\n"
        );

        list.remove_at(0).unwrap();
        assert_eq!(
            storage.blob().unwrap(),
            "D|false|return book|2024-01-01T14:00:00\n"
        );
    }

    #[test]
    fn add_rolls_back_when_the_write_fails() {
        let storage = MemStorage::new();
        let mut list = loaded(&storage);
        list.add(Task::todo("kept")).unwrap();
        let before = storage.blob().unwrap();

        storage.fail_writes(true);
        let err = list.add(Task::todo("lost")).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).description(), "kept");
        assert_eq!(storage.blob().unwrap(), before);
    }

    #[test]
    fn remove_rolls_back_to_the_same_index() {
        let storage = MemStorage::new();
        let mut list = loaded(&storage);
        for name in ["a", "b", "c"] {
            list.add(Task::todo(name)).unwrap();
        }

        storage.fail_writes(true);
        let err = list.remove_at(1).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).description(), "b");
    }

    #[test]
    fn update_rolls_back_the_old_task() {
        let storage = MemStorage::new();
        let mut list = loaded(&storage);
        list.add(Task::todo("original")).unwrap();

        storage.fail_writes(true);
        let mut replacement = list.get(0).clone();
        replacement.set_done(true);
        let err = list.update(0, replacement).unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert!(!list.get(0).is_done());
        assert_eq!(list.get(0).description(), "original");
    }

    #[test]
    fn failed_mutation_leaves_storage_and_memory_in_step() {
        let storage = MemStorage::new();
        let mut list = loaded(&storage);
        list.add(Task::todo("stable")).unwrap();

        storage.fail_writes(true);
        let _ = list.add(Task::todo("rejected"));
        storage.fail_writes(false);

        // The next successful write reflects exactly the rolled-back state.
        list.add(Task::todo("after")).unwrap();
        assert_eq!(
            storage.blob().unwrap(),
            "T|false|stable\nT|false|after\n"
        );
    }
}

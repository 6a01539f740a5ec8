//! Task operations that persist the collection after every mutation.
//!
//! A failed save never rolls back the in-memory change: the task list keeps
//! the mutation for the rest of the session, and the next successful save
//! rewrites the whole file.

use crate::error::InputError;
use crate::store::TaskStore;
use crate::task::{timestamp, Task};
use crate::task_list::{TaskList, Transition};
use std::num::IntErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Saved(u32),
    /// Added in memory, but the store rejected the write.
    NotSaved(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    Marked(u32),
    /// Marked in memory, but the store rejected the write.
    NotSaved(u32),
    AlreadyDone(u32),
    /// Carries the id as it should be shown back to the user.
    NotFound(String),
}

pub struct TaskManager<'s, S: TaskStore + ?Sized> {
    store: &'s S,
    tasks: TaskList,
}

impl<'s, S: TaskStore + ?Sized> TaskManager<'s, S> {
    /// Loads the collection once; later mutations go back through `store`.
    pub fn open(store: &'s S) -> Self {
        let tasks = TaskList::from_tasks(store.load());
        Self { store, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn add(&mut self, title: &str, description: &str) -> Result<AddOutcome, InputError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InputError::EmptyTitle);
        }

        let id = self
            .tasks
            .add_task(title.to_string(), description.trim().to_string(), timestamp())
            .id;
        tracing::debug!(id, "Added task");

        if self.store.save(self.tasks.tasks()) {
            Ok(AddOutcome::Saved(id))
        } else {
            Ok(AddOutcome::NotSaved(id))
        }
    }

    /// Marks the task whose id is written in `id_text` as done.
    pub fn mark_done(&mut self, id_text: &str) -> Result<MarkOutcome, InputError> {
        let Some(id) = parse_task_id(id_text)? else {
            return Ok(MarkOutcome::NotFound(id_text.trim().to_string()));
        };

        match self.tasks.mark_done(id, timestamp()) {
            Transition::NotFound => Ok(MarkOutcome::NotFound(id.to_string())),
            Transition::AlreadyDone => Ok(MarkOutcome::AlreadyDone(id)),
            Transition::Marked => {
                tracing::debug!(id, "Marked task as done");
                if self.store.save(self.tasks.tasks()) {
                    Ok(MarkOutcome::Marked(id))
                } else {
                    Ok(MarkOutcome::NotSaved(id))
                }
            }
        }
    }
}

/// Parses a task id typed by the user. Surrounding whitespace is ignored.
///
/// Any integer is accepted; `None` means no task can carry it (negative or
/// too large for an id).
pub fn parse_task_id(text: &str) -> Result<Option<u32>, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => Ok(u32::try_from(value).ok()),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(InputError::InvalidNumber(trimmed.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory store that records every save and can be told to fail.
    #[derive(Default)]
    pub(crate) struct RecordingStore {
        pub initial: Vec<Task>,
        pub fail_saves: Cell<bool>,
        pub saves: RefCell<Vec<Vec<Task>>>,
    }

    impl RecordingStore {
        pub fn save_count(&self) -> usize {
            self.saves.borrow().len()
        }
    }

    impl TaskStore for RecordingStore {
        fn load(&self) -> Vec<Task> {
            self.initial.clone()
        }

        fn save(&self, tasks: &[Task]) -> bool {
            self.saves.borrow_mut().push(tasks.to_vec());
            !self.fail_saves.get()
        }
    }

    #[test]
    fn add_assigns_sequential_ids_and_saves_each_time() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        for expected in 1..=4 {
            let outcome = manager.add(&format!("task {expected}"), "").unwrap();
            assert_eq!(outcome, AddOutcome::Saved(expected));
        }
        assert_eq!(store.save_count(), 4);
        assert_eq!(store.saves.borrow()[3].len(), 4);
    }

    #[test]
    fn add_trims_title_and_description() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        manager.add("  Finish report \n", "  draft  ").unwrap();
        let task = &manager.tasks()[0];
        assert_eq!(task.title, "Finish report");
        assert_eq!(task.description, "draft");
        assert!(!task.done);
    }

    #[test]
    fn blank_title_is_rejected_without_saving() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        for title in ["", "   ", "\t\n"] {
            assert_eq!(manager.add(title, "desc"), Err(InputError::EmptyTitle));
        }
        assert!(manager.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn failed_save_keeps_added_task_in_memory() {
        let store = RecordingStore::default();
        store.fail_saves.set(true);
        let mut manager = TaskManager::open(&store);
        assert_eq!(manager.add("a", "").unwrap(), AddOutcome::NotSaved(1));
        assert_eq!(manager.add("b", "").unwrap(), AddOutcome::NotSaved(2));
        assert_eq!(manager.tasks().len(), 2);
    }

    #[test]
    fn mark_done_saves_and_records_completion() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        manager.add("a", "").unwrap();
        assert_eq!(manager.mark_done(" 1 ").unwrap(), MarkOutcome::Marked(1));
        assert!(manager.tasks()[0].done);
        assert!(manager.tasks()[0].completed_at.is_some());
        assert_eq!(store.save_count(), 2);
        assert!(store.saves.borrow()[1][0].done);
    }

    #[test]
    fn mark_done_again_does_not_save_or_touch_timestamp() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        manager.add("a", "").unwrap();
        manager.mark_done("1").unwrap();
        let completed = manager.tasks()[0].completed_at.clone();

        assert_eq!(manager.mark_done("1").unwrap(), MarkOutcome::AlreadyDone(1));
        assert_eq!(manager.tasks()[0].completed_at, completed);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn mark_unknown_ids_reports_not_found() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        manager.add("a", "").unwrap();
        for text in ["2", "0", "-1", "99999999999", "99999999999999999999", "-99999999999999999999"] {
            assert_eq!(
                manager.mark_done(text).unwrap(),
                MarkOutcome::NotFound(text.to_string())
            );
        }
        assert!(!manager.tasks()[0].done);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn parse_task_id_accepts_any_integer() {
        assert_eq!(parse_task_id(" 7 "), Ok(Some(7)));
        assert_eq!(parse_task_id("-3"), Ok(None));
        assert_eq!(parse_task_id("4294967296"), Ok(None));
        assert_eq!(parse_task_id("123456789012345678901234567890"), Ok(None));
        assert_eq!(
            parse_task_id("1.5"),
            Err(InputError::InvalidNumber("1.5".into()))
        );
        assert_eq!(parse_task_id(""), Err(InputError::InvalidNumber(String::new())));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        manager.add("a", "").unwrap();
        assert_eq!(
            manager.mark_done("abc"),
            Err(InputError::InvalidNumber("abc".into()))
        );
        assert!(!manager.tasks()[0].done);
    }

    #[test]
    fn failed_save_keeps_mark_in_memory() {
        let store = RecordingStore::default();
        let mut manager = TaskManager::open(&store);
        manager.add("a", "").unwrap();
        store.fail_saves.set(true);
        assert_eq!(manager.mark_done("1").unwrap(), MarkOutcome::NotSaved(1));
        assert!(manager.tasks()[0].done);
    }

    #[test]
    fn ids_continue_from_loaded_length() {
        let store = RecordingStore {
            initial: vec![Task::new(1, "old".into(), String::new(), "2025-01-01 00:00:00".into())],
            ..Default::default()
        };
        let mut manager = TaskManager::open(&store);
        assert_eq!(manager.add("new", "").unwrap(), AddOutcome::Saved(2));
    }
}

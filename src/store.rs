//! In-memory task store
//!
//! The store is the single owner of all live tasks and the only place IDs
//! are assigned. Everything lives in process memory; nothing survives
//! exit. The store itself is single-threaded — callers that share one
//! across threads must wrap it in their own lock.

use crate::domain::{Task, TaskId, TitleError};

/// Owner of all live tasks and the next-ID counter
///
/// IDs are handed out in ascending order starting at 1 and are never
/// reused, even after the task they named has been deleted.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store with the ID counter at 1
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Creates a pending task with the next available ID
    ///
    /// Validation runs before the counter is touched: a rejected title
    /// consumes no ID and leaves the store unchanged.
    pub fn add(&mut self, title: impl Into<String>) -> Result<&Task, TitleError> {
        let task = Task::new(self.next_id, title)?;
        self.next_id = self.next_id.next();
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Returns all live tasks in ascending ID order
    pub fn list(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| t.id());
        tasks
    }

    /// Looks up a task by ID; absence is a normal outcome, not an error
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Marks a task as done
    ///
    /// Idempotent: completing an already-done task succeeds with no
    /// state change. Returns `None` if no task has the given ID.
    pub fn complete(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id() == id)?;
        task.complete();
        Some(task)
    }

    /// Removes a task, returning whether one was found
    ///
    /// The removed ID is never reassigned by later `add` calls.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        self.tasks.len() != before
    }

    /// Replaces a task's title, leaving its ID and status untouched
    ///
    /// Existence is checked first: renaming a missing ID returns
    /// `Ok(None)` even when the new title is invalid. For a live task
    /// the title goes through the same validation as creation, and on
    /// `Err` the store is unchanged.
    pub fn rename(
        &mut self,
        id: TaskId,
        new_title: impl Into<String>,
    ) -> Result<Option<&Task>, TitleError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            return Ok(None);
        };
        task.set_title(new_title)?;
        Ok(Some(task))
    }

    /// Returns the number of live tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no tasks are live
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

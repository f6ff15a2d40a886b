//! Task domain model
//!
//! A task is a single todo item: an ID, a title, and a pending/done flag.
//! Titles are validated at construction and on every rename, so a live
//! task always satisfies the same constraints its constructor enforced.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::id::TaskId;

/// Longest accepted title, counted in characters (not bytes)
pub const MAX_TITLE_CHARS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Task title cannot be empty")]
    Empty,

    #[error("Task title cannot exceed {MAX_TITLE_CHARS} characters (got {0})")]
    TooLong(usize),
}

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    /// Returns true if this status represents completion
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    /// Returns a display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single todo item
///
/// Fields are private: mutation goes through [`Task::set_title`] and
/// [`Task::complete`] so the title invariants hold for the task's whole
/// lifetime, and the ID can never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
}

impl Task {
    /// Creates a pending task with the given ID and title
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, TitleError> {
        Self::with_status(id, title, TaskStatus::default())
    }

    /// Creates a task with an explicit status
    ///
    /// This is the full constructor; code that builds tasks outside the
    /// store (imports, fixtures) goes through here and gets the same
    /// title validation as `create`.
    pub fn with_status(
        id: TaskId,
        title: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, TitleError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self { id, title, status })
    }

    /// Returns the task's ID
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task's status
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Replaces the title, applying the same rules as construction
    ///
    /// On error the existing title is left untouched.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), TitleError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Transitions to done status
    ///
    /// One-directional and idempotent: completing an already-done task
    /// is a no-op, not an error.
    pub fn complete(&mut self) {
        self.status = TaskStatus::Done;
    }
}

/// Checks the title rules shared by creation and rename
fn validate_title(title: &str) -> Result<(), TitleError> {
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(TitleError::TooLong(chars));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> TaskId {
        TaskId::new(raw).unwrap()
    }

    #[test]
    fn new_task_is_pending() {
        let task = Task::new(id(1), "Buy milk").unwrap();
        assert_eq!(task.id().value(), 1);
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.status(), TaskStatus::Pending);
        assert!(!task.status().is_done());
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(Task::new(id(1), "").unwrap_err(), TitleError::Empty);
    }

    #[test]
    fn title_at_limit_is_accepted() {
        let task = Task::new(id(1), "x".repeat(1000)).unwrap();
        assert_eq!(task.title().chars().count(), 1000);
    }

    #[test]
    fn title_over_limit_is_rejected() {
        assert_eq!(
            Task::new(id(1), "x".repeat(1001)).unwrap_err(),
            TitleError::TooLong(1001)
        );
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        // 1000 three-byte characters: 3000 bytes but exactly at the limit
        let title = "あ".repeat(1000);
        assert!(title.len() > 1000);
        assert!(Task::new(id(1), title).is_ok());

        assert_eq!(
            Task::new(id(1), "あ".repeat(1001)).unwrap_err(),
            TitleError::TooLong(1001)
        );
    }

    #[test]
    fn with_status_builds_done_tasks() {
        let task = Task::with_status(id(3), "Imported", TaskStatus::Done).unwrap();
        assert!(task.status().is_done());
    }

    #[test]
    fn with_status_still_validates_title() {
        assert_eq!(
            Task::with_status(id(3), "", TaskStatus::Done).unwrap_err(),
            TitleError::Empty
        );
    }

    #[test]
    fn complete_is_idempotent() {
        let mut task = Task::new(id(1), "A").unwrap();
        task.complete();
        assert_eq!(task.status(), TaskStatus::Done);
        task.complete();
        assert_eq!(task.status(), TaskStatus::Done);
    }

    #[test]
    fn set_title_replaces_valid_titles() {
        let mut task = Task::new(id(1), "Old").unwrap();
        task.set_title("New").unwrap();
        assert_eq!(task.title(), "New");
    }

    #[test]
    fn set_title_revalidates() {
        let mut task = Task::new(id(1), "Keep me").unwrap();

        assert_eq!(task.set_title("").unwrap_err(), TitleError::Empty);
        assert_eq!(task.title(), "Keep me");

        assert_eq!(
            task.set_title("x".repeat(1001)).unwrap_err(),
            TitleError::TooLong(1001)
        );
        assert_eq!(task.title(), "Keep me");
    }

    #[test]
    fn set_title_leaves_id_and_status_alone() {
        let mut task = Task::new(id(9), "A").unwrap();
        task.complete();
        task.set_title("B").unwrap();
        assert_eq!(task.id().value(), 9);
        assert_eq!(task.status(), TaskStatus::Done);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn task_serializes_with_numeric_id() {
        let task = Task::new(id(5), "Pay rent").unwrap();
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 5, "title": "Pay rent", "status": "pending"})
        );
    }
}

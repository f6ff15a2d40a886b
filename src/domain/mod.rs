//! Domain models for the todo CLI
//!
//! Contains the task entity and its identifiers, without any I/O concerns.

mod id;
mod task;

pub use id::{IdError, TaskId};
pub use task::{Task, TaskStatus, TitleError, MAX_TITLE_CHARS};

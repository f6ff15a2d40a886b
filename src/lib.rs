//! Todo CLI - An in-memory todo list with a colorful terminal front end
//!
//! Tasks live only for the duration of one process: the store assigns
//! IDs, validates titles, and implements the CRUD operations, while the
//! CLI and interactive menu render results on top of it.

pub mod cli;
pub mod domain;
pub mod store;

pub use domain::{IdError, Task, TaskId, TaskStatus, TitleError};
pub use store::TaskStore;

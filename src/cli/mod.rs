//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add` | Create a task |
//! | `list` | Show all tasks as a table |
//! | `complete` | Mark a task as done |
//! | `delete` | Remove a task |
//! | `rename` | Change a task's title |
//!
//! Running with no command starts the interactive menu.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable, color-coded output
//! - `json` - Machine-parseable JSON
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod interactive;
mod output;
mod task;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};

//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{interactive, task};
use crate::domain::TaskId;
use crate::store::TaskStore;

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "In-memory todo list - manage your tasks with style")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Command to run; omit to start the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
    },

    /// List all tasks
    List,

    /// Mark a task as done
    Complete {
        /// Task ID
        id: TaskId,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },

    /// Change a task's title
    Rename {
        /// Task ID
        id: TaskId,

        /// New task title
        title: String,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    // One store per process run; everything is gone at exit.
    let mut store = TaskStore::new();

    match cli.command {
        None => {
            output.verbose("No subcommand given, starting interactive menu");
            interactive::run(&mut store, &output)
        }
        Some(Commands::Add { title }) => task::add(&mut store, &output, &title),
        Some(Commands::List) => task::list(&store, &output),
        Some(Commands::Complete { id }) => task::complete(&mut store, &output, id),
        Some(Commands::Delete { id }) => task::delete(&mut store, &output, id),
        Some(Commands::Rename { id, title }) => task::rename(&mut store, &output, id, &title),
    }
}

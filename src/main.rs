//! Todo CLI - In-memory todo list with an interactive menu

use std::process::ExitCode;

use crossterm::style::Stylize;

fn main() -> ExitCode {
    if let Err(e) = todo_cli::cli::run() {
        eprintln!("{}", format!("Error: {:#}", e).red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

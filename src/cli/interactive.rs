//! Interactive menu mode
//!
//! Runs when the binary is invoked with no subcommand: a numbered menu
//! looping over one long-lived store, so tasks accumulate across menu
//! actions until the session ends. EOF on stdin exits like choosing
//! Exit.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use super::output::{render_table, Output};
use crate::domain::TaskId;
use crate::store::TaskStore;

pub fn run(store: &mut TaskStore, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_session(store, output, &mut input)
}

/// Drives the menu loop over an arbitrary line source (tests feed a
/// scripted buffer through here)
fn run_session(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    loop {
        print_menu();

        let Some(choice) = prompt(input, &format!("{}", "Enter your choice: ".yellow().bold()))?
        else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add_task(store, output, input)?,
            "2" => {
                println!();
                println!("{}", render_table(&store.list()));
            }
            "3" => complete_task(store, output, input)?,
            "4" => delete_task(store, output, input)?,
            "5" => edit_task(store, output, input)?,
            "6" => {
                println!("{}", "Goodbye!".green());
                return Ok(());
            }
            _ => output.error("Invalid choice. Please select 1-6."),
        }
    }
}

fn print_menu() {
    let bar = "=".repeat(30);
    println!();
    println!("{}", bar.as_str().cyan().bold());
    println!("{}", "   TODO APPLICATION".cyan().bold());
    println!("{}", bar.as_str().cyan().bold());
    println!();
    println!("1. Add Task");
    println!("2. View Tasks");
    println!("3. Update Task (Complete)");
    println!("4. Delete Task");
    println!("5. Edit Task Title");
    println!("6. Exit");
    println!();
}

fn add_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(title) = prompt(input, "Enter task title: ")? else {
        return Ok(());
    };

    match store.add(title) {
        Ok(task) => output.success(&format!(
            "Task {} added successfully: {}",
            task.id(),
            task.title()
        )),
        Err(e) => output.error(&e.to_string()),
    }

    Ok(())
}

fn complete_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = prompt_id(output, input, "Enter task ID to complete: ")? else {
        return Ok(());
    };

    match store.complete(id) {
        Some(task) => output.success(&format!("Task {} marked as done", task.id())),
        None => output.error(&format!("Task with ID {} not found", id)),
    }

    Ok(())
}

fn delete_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = prompt_id(output, input, "Enter task ID to delete: ")? else {
        return Ok(());
    };

    if store.delete(id) {
        output.success(&format!("Task {} deleted successfully", id));
    } else {
        output.error(&format!("Task with ID {} not found", id));
    }

    Ok(())
}

fn edit_task(store: &mut TaskStore, output: &Output, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = prompt_id(output, input, "Enter task ID to edit: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(input, "Enter new title: ")? else {
        return Ok(());
    };

    match store.rename(id, title) {
        Ok(Some(task)) => output.success(&format!("Task {} title updated successfully!", task.id())),
        Ok(None) => output.error(&format!("Task with ID {} not found", id)),
        Err(e) => output.error(&e.to_string()),
    }

    Ok(())
}

/// Prints a prompt and reads one trimmed line; `None` means EOF
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for a task ID, reporting malformed input and skipping back to
/// the menu on a parse failure
fn prompt_id(
    output: &Output,
    input: &mut impl BufRead,
    text: &str,
) -> Result<Option<TaskId>> {
    let Some(raw) = prompt(input, text)? else {
        return Ok(None);
    };

    match raw.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            output.error("Invalid ID format. Please provide a positive integer.");
            Ok(None)
        }
    }
}

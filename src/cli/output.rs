//! Output formatting for CLI commands

use crossterm::style::Stylize;
use serde::Serialize;

use crate::domain::Task;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a success message (green in text mode)
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message.green()),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an error message to stderr (red in text mode)
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("{}", format!("Error: {}", message).red()),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                // Fallback for text mode; callers normally render their
                // own text and only use this for JSON.
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a blank line (text only)
    pub fn blank(&self) {
        if self.format == OutputFormat::Text {
            println!();
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }
}

/// Renders tasks as a table with auto-sized columns and color-coded status
///
/// Columns grow to the widest cell, the header is bold, and the status
/// column is green for done and bold yellow for pending. An empty slice
/// renders as a bold "No tasks found".
pub fn render_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return format!("{}", "No tasks found".bold());
    }

    let id_width = tasks
        .iter()
        .map(|t| t.id().to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let title_width = tasks
        .iter()
        .map(|t| t.title().chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());
    let status_width = tasks
        .iter()
        .map(|t| t.status().label().len())
        .max()
        .unwrap_or(0)
        .max("Status".len());

    let header = format!(
        "{}",
        format!(
            "{:<id_width$} | {:<title_width$} | {:<status_width$}",
            "ID", "Title", "Status"
        )
        .bold()
    );
    // 6 covers the two " | " separators
    let separator = "═".repeat(id_width + title_width + status_width + 6);

    let mut lines = vec![header, separator];
    for task in tasks {
        // Status is the last column so the color codes never upset the
        // width-based padding.
        let status = if task.status().is_done() {
            task.status().label().green().to_string()
        } else {
            task.status().label().yellow().bold().to_string()
        };
        lines.push(format!(
            "{:<id_width$} | {:<title_width$} | {}",
            task.id().to_string(),
            task.title(),
            status
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;

    #[test]
    fn empty_table_says_no_tasks() {
        let rendered = render_table(&[]);
        assert!(rendered.contains("No tasks found"));
    }

    #[test]
    fn table_contains_every_task() {
        let mut store = TaskStore::new();
        store.add("Buy milk").unwrap();
        store.add("Call mom").unwrap();
        store.complete(crate::domain::TaskId::new(1).unwrap());

        let tasks = store.list();
        let rendered = render_table(&tasks);

        assert!(rendered.contains("Buy milk"));
        assert!(rendered.contains("Call mom"));
        assert!(rendered.contains("done"));
        assert!(rendered.contains("pending"));
        assert!(rendered.contains("ID"));
        assert!(rendered.contains('═'));
    }

    #[test]
    fn title_column_grows_with_content() {
        let mut store = TaskStore::new();
        let long = "A task with a rather long title";
        store.add(long).unwrap();
        store.add("B").unwrap();

        let tasks = store.list();
        let rendered = render_table(&tasks);

        // The short row is padded out to the long title's width
        let rows: Vec<&str> = rendered.lines().skip(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].contains(&format!("{:<width$}", "B", width = long.len())));
    }
}

//! Subcommand handlers
//!
//! Each handler drives one store operation and renders the result.
//! Not-found and validation failures surface as `anyhow` errors so the
//! process exits non-zero; the store itself never prints or exits.

use anyhow::{bail, Result};

use super::output::{render_table, Output};
use crate::domain::TaskId;
use crate::store::TaskStore;

pub fn add(store: &mut TaskStore, output: &Output, title: &str) -> Result<()> {
    let task = store.add(title)?;

    if output.is_json() {
        output.data(task);
    } else {
        output.success(&format!("Task {} added: {}", task.id(), task.title()));
    }

    Ok(())
}

pub fn list(store: &TaskStore, output: &Output) -> Result<()> {
    let tasks = store.list();

    if output.is_json() {
        output.data(&tasks);
    } else {
        println!("{}", render_table(&tasks));
    }

    Ok(())
}

pub fn complete(store: &mut TaskStore, output: &Output, id: TaskId) -> Result<()> {
    let Some(task) = store.complete(id) else {
        bail!("Task with ID {} not found", id);
    };

    if output.is_json() {
        output.data(task);
    } else {
        output.success(&format!("Task {} marked as done", task.id()));
    }

    Ok(())
}

pub fn delete(store: &mut TaskStore, output: &Output, id: TaskId) -> Result<()> {
    if !store.delete(id) {
        bail!("Task with ID {} not found", id);
    }

    if output.is_json() {
        output.data(&serde_json::json!({ "id": id, "deleted": true }));
    } else {
        output.success(&format!("Task {} deleted", id));
    }

    Ok(())
}

pub fn rename(store: &mut TaskStore, output: &Output, id: TaskId, title: &str) -> Result<()> {
    let Some(task) = store.rename(id, title)? else {
        bail!("Task with ID {} not found", id);
    };

    if output.is_json() {
        output.data(task);
    } else {
        output.success(&format!("Task {} title updated: {}", task.id(), task.title()));
    }

    Ok(())
}

use anyhow::{Context, Result};
use colored::Colorize;

use super::{load_existing, locate, pick_status};
use crate::config::StoreConfig;
use crate::format::{format_status, format_todo, FormatOptions};
use crate::persistence::write_todos;
use crate::prompt::Prompter;
use crate::CheckArgs;

const STATUS_PROMPT: &str = "Pick new status for a task";

pub fn run(args: &CheckArgs, store: &StoreConfig, prompter: &mut dyn Prompter) -> Result<()> {
    let Some(mut list) = load_existing(store)? else {
        return Ok(());
    };
    let Some(idx) = locate(&list, args.id.as_deref(), args.title.as_deref(), prompter)? else {
        return Ok(());
    };

    let mut todo = list.items[idx].clone();
    println!("{}", format_todo(&todo, &FormatOptions::default()));

    let status = match args.status() {
        Some(status) => status,
        None => pick_status(prompter, STATUS_PROMPT, todo.status)?,
    };
    let previous = todo.status;
    todo.status = status;
    list.replace(todo.clone());

    write_todos(store, &list).context("Unable to save the updated todos")?;
    tracing::info!(id = %todo.id, from = %previous, to = %status, "todo updated");

    println!(
        "{}",
        format!(
            "\nTask \"{}\" now in status {}",
            todo.title.blue(),
            format_status(status)
        )
        .bright_green()
    );
    Ok(())
}

use anyhow::{Context, Result};
use colored::Colorize;

use super::confirmed;
use crate::config::StoreConfig;
use crate::persistence::write_todos;
use crate::prompt::Prompter;
use crate::todolist::TodoList;
use crate::ClearArgs;

pub fn run(args: &ClearArgs, store: &StoreConfig, prompter: &mut dyn Prompter) -> Result<()> {
    if !confirmed(prompter, args.yes, "Are you sure you want to delete all tasks?")? {
        println!("{}", "Nothing was deleted.".dimmed());
        return Ok(());
    }

    write_todos(store, &TodoList::default()).context("Unable to clear todos")?;
    tracing::info!(path = %store.path().display(), "todos cleared");

    println!("{}", "\nAll tasks were successfully deleted!".bright_green());
    Ok(())
}

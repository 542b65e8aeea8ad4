use anyhow::{Context, Result};
use colored::Colorize;

use super::{confirmed, load_existing, locate};
use crate::config::StoreConfig;
use crate::format::{format_todo, FormatOptions};
use crate::persistence::write_todos;
use crate::prompt::Prompter;
use crate::DeleteArgs;

pub fn run(args: &DeleteArgs, store: &StoreConfig, prompter: &mut dyn Prompter) -> Result<()> {
    let Some(mut list) = load_existing(store)? else {
        return Ok(());
    };
    let Some(idx) = locate(&list, args.id.as_deref(), args.title.as_deref(), prompter)? else {
        return Ok(());
    };

    let id = list.items[idx].id.clone();
    println!("{}", format_todo(&list.items[idx], &FormatOptions::default()));

    if !confirmed(prompter, args.yes, "Are you sure you want to delete this task?")? {
        println!("{}", "Nothing was deleted.".dimmed());
        return Ok(());
    }

    let Some(removed) = list.remove_by_id(&id) else {
        return Ok(());
    };
    write_todos(store, &list).context("Unable to save the updated todos")?;
    tracing::info!(id = %removed.id, "todo deleted");

    println!(
        "{}",
        format!("\nTask \"{}\" deleted successfully!", removed.title.blue()).bright_green()
    );
    Ok(())
}

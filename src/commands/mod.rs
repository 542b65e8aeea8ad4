//! One handler per CLI verb.
//!
//! Handlers gather missing input through a [`Prompter`], resolve the target
//! todo, mutate the in-memory list and write the whole list back. Store and
//! write failures are returned as errors; misses and declined confirmations
//! are printed and end the command without touching the store.

pub mod add;
pub mod check;
pub mod clear;
pub mod delete;
pub mod fake;
pub mod view;

use anyhow::Result;
use colored::Colorize;

use crate::config::StoreConfig;
use crate::format::{format_priority, format_status};
use crate::lookup::{find_by_id, find_todo, Lookup, Miss};
use crate::persistence::{read_todos, StoreError};
use crate::prompt::{PromptError, Prompter};
use crate::task::{Priority, Status};
use crate::todolist::TodoList;
use crate::Cmd;

pub fn run(cmd: &Cmd, store: &StoreConfig, prompter: &mut dyn Prompter) -> Result<()> {
    match cmd {
        Cmd::Add(args) => add::run(args, store, prompter),
        Cmd::View(args) => view::run(args, store),
        Cmd::Check(args) => check::run(args, store, prompter),
        Cmd::Delete(args) => delete::run(args, store, prompter),
        Cmd::Clear(args) => clear::run(args, store, prompter),
        Cmd::Fake(args) => fake::run(args, store),
    }
}

/// Loads the store, treating a missing file as a fresh, empty list.
fn load_or_empty(store: &StoreConfig) -> Result<TodoList, StoreError> {
    match read_todos(store) {
        Ok(list) => Ok(list),
        Err(StoreError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "store missing, starting empty");
            Ok(TodoList::default())
        }
        Err(err) => Err(err),
    }
}

/// Loads the store for commands that act on existing todos. A missing file
/// is reported and yields `None`.
fn load_existing(store: &StoreConfig) -> Result<Option<TodoList>, StoreError> {
    match read_todos(store) {
        Ok(list) => Ok(Some(list)),
        Err(StoreError::NotFound(_)) => {
            report_miss(Miss::NoTasks);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Resolves the target by id when given, otherwise through title lookup.
fn locate(
    list: &TodoList,
    id: Option<&str>,
    title: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<Option<usize>, PromptError> {
    let lookup = match id {
        Some(id) => find_by_id(list, id),
        None => find_todo(list, title, prompter)?,
    };
    Ok(match lookup {
        Lookup::Found(idx) => Some(idx),
        Lookup::Missed(miss) => {
            report_miss(miss);
            None
        }
    })
}

fn report_miss(miss: Miss) {
    if miss.is_invalid_input() {
        eprintln!("{}", miss.to_string().red());
    } else {
        println!("{}", miss.to_string().yellow());
    }
}

fn pick_status(
    prompter: &mut dyn Prompter,
    message: &str,
    current: Status,
) -> Result<Status, PromptError> {
    let items: Vec<String> = Status::ALL
        .iter()
        .map(|s| format_status(*s).to_string())
        .collect();
    let default = Status::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let idx = prompter.select(message, &items, default)?;
    Ok(Status::ALL[idx])
}

fn pick_priority(prompter: &mut dyn Prompter, message: &str) -> Result<Priority, PromptError> {
    let items: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format_priority(*p).to_string())
        .collect();
    let idx = prompter.select(message, &items, 1)?;
    Ok(Priority::ALL[idx])
}

/// Asks for confirmation unless `skip` is set.
fn confirmed(prompter: &mut dyn Prompter, skip: bool, message: &str) -> Result<bool, PromptError> {
    if skip {
        return Ok(true);
    }
    prompter.confirm(message, false)
}

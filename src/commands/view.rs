use std::io::{self, IsTerminal};

use anyhow::Result;
use colored::Colorize;

use crate::app;
use crate::config::StoreConfig;
use crate::format::{format_todo, FormatOptions};
use crate::lookup::Miss;
use crate::persistence::{read_todos, StoreError};
use crate::task::Todo;
use crate::ViewArgs;

pub fn run(args: &ViewArgs, store: &StoreConfig) -> Result<()> {
    let list = match read_todos(store) {
        Ok(list) => list,
        Err(StoreError::NotFound(_)) => {
            println!("{}", Miss::NoTasks.to_string().yellow());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let todos = list.filtered(&args.filter());
    if todos.is_empty() {
        println!("{}", Miss::NoMatch.to_string().yellow());
        return Ok(());
    }

    if args.plain || !io::stdout().is_terminal() {
        print!("{}", render_plain(&todos));
        return Ok(());
    }
    app::run_viewer(&todos)
}

/// Numbered text block with every todo, as printed by `view --plain`.
pub fn render_plain(todos: &[&Todo]) -> String {
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| format_todo(todo, &FormatOptions::numbered(i + 1)))
        .collect::<Vec<_>>()
        .join("\n")
}

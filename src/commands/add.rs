use anyhow::{Context, Result};
use colored::Colorize;

use super::{load_or_empty, pick_priority, pick_status};
use crate::config::StoreConfig;
use crate::format::{format_todo, FormatOptions};
use crate::persistence::write_todos;
use crate::prompt::{PromptError, Prompter};
use crate::task::{Priority, Status, Todo};
use crate::validate::validate_title;
use crate::AddArgs;

const TITLE_PROMPT: &str = "What do you want to do?";
const PRIORITY_PROMPT: &str = "What is the priority of this task?";
const STATUS_PROMPT: &str = "Pick a status for the task";

/// Fields of a todo being created; whatever is still `None` gets asked for.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddDraft {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    NeedTitle,
    NeedPriority,
    NeedStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddState {
    Need(AddStep),
    /// Every field is known; carries the freshly built todo.
    Ready(Todo),
}

impl From<&AddArgs> for AddDraft {
    fn from(args: &AddArgs) -> Self {
        Self {
            title: args.title.clone(),
            priority: args.priority,
            status: args.status(),
        }
    }
}

impl AddDraft {
    pub fn state(&self) -> AddState {
        match (&self.title, self.priority, self.status) {
            (None, _, _) => AddState::Need(AddStep::NeedTitle),
            (_, None, _) => AddState::Need(AddStep::NeedPriority),
            (_, _, None) => AddState::Need(AddStep::NeedStatus),
            (Some(title), Some(priority), Some(status)) => {
                AddState::Ready(Todo::new(title.clone(), priority, status))
            }
        }
    }

    /// Asks for one missing field.
    pub fn ask(&mut self, step: AddStep, prompter: &mut dyn Prompter) -> Result<(), PromptError> {
        match step {
            AddStep::NeedTitle => {
                let title = prompter.input(TITLE_PROMPT, &|value: &str| {
                    validate_title(value).map_err(|err| format!("Error: {err}"))
                })?;
                self.title = Some(title);
            }
            AddStep::NeedPriority => {
                self.priority = Some(pick_priority(prompter, PRIORITY_PROMPT)?);
            }
            AddStep::NeedStatus => {
                self.status = Some(pick_status(prompter, STATUS_PROMPT, Status::Todo)?);
            }
        }
        Ok(())
    }

    /// Runs the flow until every field is filled.
    pub fn complete(mut self, prompter: &mut dyn Prompter) -> Result<Todo, PromptError> {
        loop {
            match self.state() {
                AddState::Need(step) => self.ask(step, prompter)?,
                AddState::Ready(todo) => return Ok(todo),
            }
        }
    }
}

pub fn run(args: &AddArgs, store: &StoreConfig, prompter: &mut dyn Prompter) -> Result<()> {
    println!("{}", "Initializing the 'Add Todo' command...\n".bright_blue());

    if let Some(title) = &args.title {
        validate_title(title)?;
    }

    let mut list = load_or_empty(store)?;
    let fresh_store = !store.path().exists();

    let todo = AddDraft::from(args).complete(prompter)?;
    list.push(todo.clone());
    write_todos(store, &list).context("Unable to save the updated todos")?;
    tracing::info!(id = %todo.id, title = %todo.title, "todo added");

    if fresh_store {
        println!("{}", "No todos file found, created a new one.".yellow());
    }
    println!("{}", "\nTodo successfully added!".bright_green());
    println!("{}", format_todo(&todo, &FormatOptions::default()));
    Ok(())
}

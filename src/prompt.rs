//! Interactive questions asked when a command is missing input.
//!
//! Commands only talk to the [`Prompter`] trait. [`TerminalPrompter`] asks
//! on the terminal; [`ScriptedPrompter`] replays canned answers so command
//! flows can run without a terminal.

use std::{collections::VecDeque, io, thread, time::Duration};

use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input, Select};
use thiserror::Error;

/// Visible rows in list prompts before they start scrolling.
const LIST_PAGE: usize = 10;

/// Pause before answering a title validation, as the tool always did.
pub const TITLE_VALIDATION_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Interrupted")]
    Interrupted,
    #[error("Prompt failed: {0}")]
    Io(#[source] io::Error),
    #[error("No scripted answer left for prompt {0:?}")]
    Exhausted(String),
    #[error("Scripted answer {answer:?} does not fit prompt {message:?}")]
    Unexpected { message: String, answer: Answer },
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        let dialoguer::Error::IO(err) = err;
        if err.kind() == io::ErrorKind::Interrupted {
            PromptError::Interrupted
        } else {
            PromptError::Io(err)
        }
    }
}

/// Validator used by [`Prompter::input`]; `Err` carries the message shown
/// next to the prompt.
pub type Validate<'a> = &'a dyn Fn(&str) -> Result<(), String>;

pub trait Prompter {
    /// Free text, re-asked until `validate` accepts it.
    fn input(&mut self, message: &str, validate: Validate<'_>) -> Result<String, PromptError>;

    /// Single choice; returns the index into `items`.
    fn select(&mut self, message: &str, items: &[String], default: usize)
        -> Result<usize, PromptError>;

    /// Type-to-filter choice over `items`. `None` when the user backs out.
    fn autocomplete(&mut self, message: &str, items: &[String])
        -> Result<Option<usize>, PromptError>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str, validate: Validate<'_>) -> Result<String, PromptError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|value: &String| -> Result<(), String> {
                thread::sleep(TITLE_VALIDATION_DELAY);
                validate(value.as_str())
            })
            .interact_text()?;
        Ok(value)
    }

    fn select(
        &mut self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        let idx = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default)
            .max_length(LIST_PAGE)
            .interact()?;
        Ok(idx)
    }

    fn autocomplete(
        &mut self,
        message: &str,
        items: &[String],
    ) -> Result<Option<usize>, PromptError> {
        let idx = FuzzySelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .highlight_matches(true)
            .max_length(LIST_PAGE)
            .interact_opt()?;
        Ok(idx)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// A canned answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text; for list prompts, picks the item with exactly this text.
    Text(String),
    /// Index of the picked item.
    Choice(usize),
    /// Backs out of an autocomplete prompt.
    Escape,
    Confirm(bool),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

/// Replays answers in order and records every prompt it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    rejected: Vec<(String, String)>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Messages of every prompt shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Inputs that failed validation, paired with the validation message.
    pub fn rejected(&self) -> &[(String, String)] {
        &self.rejected
    }

    fn next(&mut self, message: &str) -> Result<Answer, PromptError> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::Exhausted(message.to_string()))
    }

    fn pick(message: &str, items: &[String], answer: Answer) -> Result<usize, PromptError> {
        let idx = match &answer {
            Answer::Choice(idx) if *idx < items.len() => Some(*idx),
            Answer::Text(text) => items.iter().position(|item| item == text),
            _ => None,
        };
        idx.ok_or_else(|| PromptError::Unexpected {
            message: message.to_string(),
            answer,
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str, validate: Validate<'_>) -> Result<String, PromptError> {
        loop {
            match self.next(message)? {
                Answer::Text(value) => match validate(&value) {
                    Ok(()) => return Ok(value),
                    Err(reason) => self.rejected.push((value, reason)),
                },
                answer => {
                    return Err(PromptError::Unexpected {
                        message: message.to_string(),
                        answer,
                    })
                }
            }
        }
    }

    fn select(
        &mut self,
        message: &str,
        items: &[String],
        _default: usize,
    ) -> Result<usize, PromptError> {
        let answer = self.next(message)?;
        Self::pick(message, items, answer)
    }

    fn autocomplete(
        &mut self,
        message: &str,
        items: &[String],
    ) -> Result<Option<usize>, PromptError> {
        match self.next(message)? {
            Answer::Escape => Ok(None),
            answer => Self::pick(message, items, answer).map(Some),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            answer => Err(PromptError::Unexpected {
                message: message.to_string(),
                answer,
            }),
        }
    }
}

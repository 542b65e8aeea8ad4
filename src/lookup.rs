//! Resolves the todo a command should act on.
//!
//! Resolution is tiered: an empty list misses straight away; without a search
//! term every title is offered through an autocomplete prompt; a term shorter
//! than [`MIN_SEARCH_LEN`] is rejected; otherwise titles are filtered by
//! case-insensitive substring and the user only picks when several match.
//!
//! Prompt answers are mapped back to the first todo with an equal title, so
//! todos sharing a title cannot be told apart.

use std::fmt;

use crate::format::{contains_ignore_case, highlight_occurrences};
use crate::prompt::{PromptError, Prompter};
use crate::todolist::TodoList;

pub const MIN_SEARCH_LEN: usize = 3;

const AUTOCOMPLETE_PROMPT: &str = "Start typing the title of a task";
const PICK_PROMPT: &str = "Pick a task you meant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Index into the list.
    Found(usize),
    Missed(Miss),
}

/// Why a lookup resolved to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    NoTasks,
    TooShort,
    NoMatch,
    Cancelled,
}

impl Miss {
    /// Whether the miss comes from bad input rather than an empty result.
    pub fn is_invalid_input(self) -> bool {
        matches!(self, Miss::TooShort)
    }
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Miss::NoTasks => "You don't have any tasks",
            Miss::TooShort => "Title filter option should include more than 2 characters",
            Miss::NoMatch => "No tasks match your filter criteria.",
            Miss::Cancelled => "No task selected.",
        };
        f.write_str(text)
    }
}

pub fn find_todo(
    list: &TodoList,
    search: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<Lookup, PromptError> {
    if list.is_empty() {
        return Ok(Lookup::Missed(Miss::NoTasks));
    }

    // an empty term counts as no term at all
    let Some(term) = search.filter(|term| !term.is_empty()) else {
        let titles = list.titles();
        return Ok(match prompter.autocomplete(AUTOCOMPLETE_PROMPT, &titles)? {
            Some(choice) => resolve_title(list, &titles[choice]),
            None => Lookup::Missed(Miss::Cancelled),
        });
    };

    if term.chars().count() < MIN_SEARCH_LEN {
        return Ok(Lookup::Missed(Miss::TooShort));
    }

    let matches: Vec<usize> = list
        .items
        .iter()
        .enumerate()
        .filter(|(_, todo)| contains_ignore_case(&todo.title, term))
        .map(|(idx, _)| idx)
        .collect();

    let found = match matches.as_slice() {
        [] => Lookup::Missed(Miss::NoMatch),
        [only] => Lookup::Found(*only),
        _ => {
            let items: Vec<String> = matches
                .iter()
                .map(|&idx| highlight_occurrences(&list.items[idx].title, term))
                .collect();
            let choice = prompter.select(PICK_PROMPT, &items, 0)?;
            resolve_title(list, &list.items[matches[choice]].title)
        }
    };
    tracing::debug!(term, candidates = matches.len(), ?found, "title lookup");
    Ok(found)
}

pub fn find_by_id(list: &TodoList, id: &str) -> Lookup {
    if list.is_empty() {
        return Lookup::Missed(Miss::NoTasks);
    }
    list.find_index_by_id(id)
        .map_or(Lookup::Missed(Miss::NoMatch), Lookup::Found)
}

fn resolve_title(list: &TodoList, title: &str) -> Lookup {
    list.find_index_by_title(title)
        .map_or(Lookup::Missed(Miss::NoMatch), Lookup::Found)
}

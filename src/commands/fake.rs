use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use colored::Colorize;
use rand::Rng;

use super::load_or_empty;
use crate::config::StoreConfig;
use crate::persistence::write_todos;
use crate::task::{uuid_id, Priority, Status, Todo};
use crate::FakeArgs;

const MIN_WORDS: usize = 3;
const MAX_WORDS: usize = 10;
const MAX_AGE_DAYS: i64 = 50;

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Builds one synthetic todo created at most 50 days before `now`.
pub fn fake_todo(rng: &mut impl Rng, now: DateTime<Utc>) -> Todo {
    let words = rng.random_range(MIN_WORDS..=MAX_WORDS);
    let title = (0..words)
        .map(|_| LOREM[rng.random_range(0..LOREM.len())])
        .collect::<Vec<_>>()
        .join(" ");
    let age = Duration::seconds(rng.random_range(0..MAX_AGE_DAYS * 24 * 60 * 60));

    Todo {
        id: uuid_id(),
        title,
        priority: Priority::ALL[rng.random_range(0..Priority::ALL.len())],
        status: Status::ALL[rng.random_range(0..Status::ALL.len())],
        created_at: Some(now - age),
    }
}

pub fn fake_todos(count: usize, rng: &mut impl Rng) -> Vec<Todo> {
    let now = Utc::now();
    (0..count).map(|_| fake_todo(rng, now)).collect()
}

pub fn run(args: &FakeArgs, store: &StoreConfig) -> Result<()> {
    let mut list = load_or_empty(store)?;
    let fresh = fake_todos(args.number, &mut rand::rng());
    let count = fresh.len();
    list.extend(fresh);

    write_todos(store, &list).context("Unable to add new todos")?;
    tracing::info!(count, total = list.len(), "fake todos added");

    println!("{}", format!("{count} fake todos successfully added").green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn fake_todos_have_plausible_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        for _ in 0..200 {
            let todo = fake_todo(&mut rng, now);
            let words = todo.title.split(' ').count();
            assert!((MIN_WORDS..=MAX_WORDS).contains(&words), "{}", todo.title);
            let created = todo.created_at.unwrap();
            assert!(created <= now);
            assert!(now - created < Duration::days(MAX_AGE_DAYS));
            assert_eq!(todo.id.len(), 36);
        }
    }

    #[test]
    fn fake_ids_are_unique() {
        let todos = fake_todos(50, &mut StdRng::seed_from_u64(1));
        let ids: HashSet<_> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
    }
}

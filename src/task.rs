use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Minimum title length (exclusive) accepted when creating a todo.
pub const MIN_TITLE_LEN: usize = 5;

const SHORT_ID_LEN: usize = 21;
const SHORT_ID_ALPHABET: &[u8] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    pub fn is_done(self) -> bool {
        self == Status::Done
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task record as stored on disk.
///
/// Records written by older versions carry a `completed` flag instead of
/// `status`; those are migrated while deserializing (see [`RawTodo`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTodo")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a fresh todo with a short id and the current time.
    pub fn new(title: impl Into<String>, priority: Priority, status: Status) -> Self {
        Self {
            id: short_id(),
            title: title.into(),
            priority,
            status,
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("record has neither `status` nor `completed`")]
    MissingStatus,
    #[error("record has both `status` and `completed`")]
    MixedStatus,
}

/// On-disk shape accepted by both schema generations.
#[derive(Debug, Deserialize)]
struct RawTodo {
    id: String,
    title: String,
    priority: Priority,
    status: Option<Status>,
    completed: Option<bool>,
    #[serde(rename = "createdAt")]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawTodo> for Todo {
    type Error = SchemaError;

    fn try_from(raw: RawTodo) -> Result<Self, Self::Error> {
        let status = match (raw.status, raw.completed) {
            (Some(status), None) => status,
            (None, Some(completed)) => {
                tracing::debug!(id = %raw.id, completed, "migrating legacy completed flag");
                if completed {
                    Status::Done
                } else {
                    Status::Todo
                }
            }
            (Some(_), Some(_)) => return Err(SchemaError::MixedStatus),
            (None, None) => return Err(SchemaError::MissingStatus),
        };

        Ok(Self {
            id: raw.id,
            title: raw.title,
            priority: raw.priority,
            status,
            created_at: raw.created_at,
        })
    }
}

/// Generates a 21 character URL-safe id.
pub fn short_id() -> String {
    let mut rng = rand::rng();
    (0..SHORT_ID_LEN)
        .map(|_| {
            let idx = rng.random_range(0..SHORT_ID_ALPHABET.len());
            SHORT_ID_ALPHABET[idx] as char
        })
        .collect()
}

pub fn uuid_id() -> String {
    Uuid::new_v4().to_string()
}

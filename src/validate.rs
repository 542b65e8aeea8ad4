use thiserror::Error;

use crate::task::{Priority, Status, MIN_TITLE_LEN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Priority should be one of following values: {}", join(&Priority::ALL))]
    InvalidPriority(String),
    #[error("Status should be one of following values: {}", join(&Status::ALL))]
    InvalidStatus(String),
    #[error("Todo length must be more than {} characters.", MIN_TITLE_LEN)]
    TitleTooShort,
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value parser for `--priority`.
pub fn parse_priority(value: &str) -> Result<Priority, ValidationError> {
    Priority::ALL
        .into_iter()
        .find(|p| p.as_str() == value)
        .ok_or_else(|| ValidationError::InvalidPriority(value.to_string()))
}

/// Value parser for `--status`.
pub fn parse_status(value: &str) -> Result<Status, ValidationError> {
    Status::ALL
        .into_iter()
        .find(|s| s.as_str() == value)
        .ok_or_else(|| ValidationError::InvalidStatus(value.to_string()))
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() > MIN_TITLE_LEN {
        Ok(())
    } else {
        Err(ValidationError::TitleTooShort)
    }
}

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::task::Todo;
use crate::todolist::TodoList;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Tasks file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("Error reading todos file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "Error parsing todos file {}. It might be corrupted, check that it contains valid JSON",
        path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Todos file {} must contain a JSON array of tasks", .0.display())]
    NotAnArray(PathBuf),
    #[error("Invalid task at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate task id {id:?} at index {index}")]
    DuplicateId { index: usize, id: String },
    #[error("Unable to save todos to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads the full list from the store.
///
/// A missing file is reported as [`StoreError::NotFound`] so each command can
/// decide whether that means "first run" or "nothing to do".
pub fn read_todos(config: &StoreConfig) -> Result<TodoList, StoreError> {
    let path = config.path();
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(records) = value else {
        return Err(StoreError::NotAnArray(path.to_path_buf()));
    };

    let list = decode_records(records)?;
    tracing::debug!(path = %path.display(), count = list.len(), "read todos");
    Ok(list)
}

fn decode_records(records: Vec<Value>) -> Result<TodoList, StoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut items = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let todo: Todo = serde_json::from_value(record)
            .map_err(|source| StoreError::InvalidRecord { index, source })?;
        if !seen.insert(todo.id.clone()) {
            return Err(StoreError::DuplicateId { index, id: todo.id });
        }
        items.push(todo);
    }
    Ok(TodoList::from(items))
}

/// Replaces the store with `list`, pretty-printed.
///
/// Writes go to a sibling temp file first and are renamed into place, so the
/// store holds either the old list or the new one.
pub fn write_todos(config: &StoreConfig, list: &TodoList) -> Result<(), StoreError> {
    let path = config.path();
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let bytes = serde_json::to_vec_pretty(&list.items)
        .map_err(io::Error::from)
        .map_err(write_err)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, &bytes).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        write_err(source)
    })?;

    tracing::debug!(path = %path.display(), count = list.len(), "wrote todos");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Status};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> StoreConfig {
        StoreConfig::new(dir.path().join("todos.json"))
    }

    fn sample() -> TodoList {
        TodoList::from(vec![
            Todo {
                id: "V1StGXR8_Z5jdHi6B-myT".into(),
                title: "Buy milk and eggs".into(),
                priority: Priority::Medium,
                status: Status::Todo,
                created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()),
            },
            Todo {
                id: "0b4c6a1e-2f7d-4c1a-9b7e-3f6a1d2c8e90".into(),
                title: "File taxes".into(),
                priority: Priority::Urgent,
                status: Status::InProgress,
                created_at: None,
            },
        ])
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        let list = sample();
        write_todos(&config, &list).unwrap();
        assert_eq!(read_todos(&config).unwrap(), list);
        assert!(!tmp_path(config.path()).exists());
    }

    #[test]
    fn writes_two_space_indented_array() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        write_todos(&config, &TodoList::default()).unwrap();
        assert_eq!(fs::read_to_string(config.path()).unwrap(), "[]");

        write_todos(&config, &sample()).unwrap();
        let text = fs::read_to_string(config.path()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": "));
        assert!(text.contains("\"createdAt\": \"2024-05-01T09:30:00Z\""));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("nested/deeper/todos.json"));
        write_todos(&config, &sample()).unwrap();
        assert_eq!(read_todos(&config).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_todos(&store(&dir)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn corrupt_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        fs::write(config.path(), "[{\"id\": ").unwrap();
        assert!(matches!(read_todos(&config), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn non_array_is_rejected() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        fs::write(config.path(), r#"{"todos": []}"#).unwrap();
        assert!(matches!(read_todos(&config), Err(StoreError::NotAnArray(_))));
    }

    #[test]
    fn reports_first_invalid_record_index() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        fs::write(
            config.path(),
            r#"[
                {"id": "1", "title": "Fine task", "priority": "low", "status": "todo"},
                {"id": "2", "title": "Bad task", "priority": "low", "status": "maybe"},
                {"id": "3", "title": 42}
            ]"#,
        )
        .unwrap();
        match read_todos(&config) {
            Err(StoreError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        fs::write(
            config.path(),
            r#"[
                {"id": "1", "title": "First task", "priority": "low", "status": "todo"},
                {"id": "1", "title": "Second task", "priority": "high", "status": "done"}
            ]"#,
        )
        .unwrap();
        match read_todos(&config) {
            Err(StoreError::DuplicateId { index, id }) => {
                assert_eq!(index, 1);
                assert_eq!(id, "1");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn legacy_store_is_migrated_on_read() {
        let dir = TempDir::new().unwrap();
        let config = store(&dir);
        fs::write(
            config.path(),
            r#"[{"id": "x1", "title": "Legacy task", "priority": "high", "completed": true}]"#,
        )
        .unwrap();
        let list = read_todos(&config).unwrap();
        assert_eq!(list.items[0].status, Status::Done);

        write_todos(&config, &list).unwrap();
        let text = fs::read_to_string(config.path()).unwrap();
        assert!(text.contains("\"status\": \"done\""));
        assert!(!text.contains("completed"));
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // The store path is an existing directory, so the rename fails.
        let config = StoreConfig::new(dir.path());
        let err = write_todos(&config, &sample()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(!tmp_path(config.path()).exists());
    }
}

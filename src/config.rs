//! Runtime configuration, built once from the global CLI flags and passed
//! explicitly to everything that touches the store.

use std::path::{Path, PathBuf};

/// File name used when no `--data-file` is given.
pub const DEFAULT_STORE_FILE: &str = "todos.json";

/// Location of the JSON store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    /// `todos.json` relative to the current working directory.
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    /// Number of `-v` flags.
    pub verbosity: u8,
    pub color: bool,
}

impl Config {
    pub fn new(data_file: Option<PathBuf>, verbosity: u8, no_color: bool) -> Self {
        Self {
            store: data_file.map(StoreConfig::new).unwrap_or_default(),
            verbosity,
            color: !no_color,
        }
    }

    /// Log filter directive for the configured verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

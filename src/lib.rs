pub mod app;
pub mod commands;
pub mod config;
pub mod format;
pub mod lookup;
pub mod persistence;
pub mod prompt;
pub mod task;
pub mod todolist;
pub mod validate;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::task::{Priority, Status};
use crate::todolist::TodoFilter;
use crate::validate::{parse_priority, parse_status};

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(
    name = "toclido",
    version,
    about = "CLI to help you manage your own business"
)]
pub struct Cli {
    /// Optional override for the data file (default: ./todos.json)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Adds a todo
    Add(AddArgs),
    /// Shows tasks, optionally filtered (default command)
    View(ViewArgs),
    /// Changes the status of a task
    #[command(visible_alias = "update")]
    Check(CheckArgs),
    /// Deletes a task
    Delete(DeleteArgs),
    /// Deletes all tasks
    Clear(ClearArgs),
    /// Adds randomly generated tasks
    Fake(FakeArgs),
}

impl Default for Cmd {
    fn default() -> Self {
        Cmd::View(ViewArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct AddArgs {
    /// Sets task title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Sets status of a task
    #[arg(short, long, value_parser = parse_status, conflicts_with = "completed")]
    pub status: Option<Status>,

    /// Marks the new task as done
    #[arg(short, long)]
    pub completed: bool,

    /// Sets task priority
    #[arg(short, long, value_parser = parse_priority)]
    pub priority: Option<Priority>,
}

impl AddArgs {
    pub fn status(&self) -> Option<Status> {
        status_from_flags(self.status, self.completed, false)
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Shows only tasks with this status
    #[arg(short, long, value_parser = parse_status, conflicts_with_all = ["completed", "incompleted"])]
    pub status: Option<Status>,

    /// Shows only completed tasks
    #[arg(short, long, conflicts_with = "incompleted")]
    pub completed: bool,

    /// Shows only incompleted tasks
    #[arg(short, long)]
    pub incompleted: bool,

    /// Shows tasks with specified priority
    #[arg(short, long, value_parser = parse_priority)]
    pub priority: Option<Priority>,

    /// Print a static list instead of the full-screen viewer
    #[arg(long)]
    pub plain: bool,
}

impl ViewArgs {
    pub fn filter(&self) -> TodoFilter {
        let completed = match (self.completed, self.incompleted) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        TodoFilter {
            status: self.status,
            completed,
            priority: self.priority,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Searches todo by title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Searches todo by id
    #[arg(long, conflicts_with = "title")]
    pub id: Option<String>,

    /// Sets the new status
    #[arg(short, long, value_parser = parse_status, conflicts_with_all = ["completed", "incompleted"])]
    pub status: Option<Status>,

    /// Sets task as completed
    #[arg(short, long, conflicts_with = "incompleted")]
    pub completed: bool,

    /// Sets task as incompleted
    #[arg(short, long)]
    pub incompleted: bool,
}

impl CheckArgs {
    pub fn status(&self) -> Option<Status> {
        status_from_flags(self.status, self.completed, self.incompleted)
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct DeleteArgs {
    /// Deletes todo by title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Deletes todo by id
    #[arg(long, conflicts_with = "title")]
    pub id: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ClearArgs {
    /// Delete all tasks without confirmation
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct FakeArgs {
    /// Number of todos to add
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,
}

fn status_from_flags(status: Option<Status>, completed: bool, incompleted: bool) -> Option<Status> {
    match (status, completed, incompleted) {
        (Some(status), _, _) => Some(status),
        (None, true, _) => Some(Status::Done),
        (None, _, true) => Some(Status::Todo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("toclido").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn add_flags_parse_into_typed_values() {
        let cli = parse(&["add", "-t", "Buy milk", "-p", "high", "-s", "in-progress"]).unwrap();
        let Some(Cmd::Add(args)) = cli.cmd else {
            panic!("expected add");
        };
        assert_eq!(args.title.as_deref(), Some("Buy milk"));
        assert_eq!(args.priority, Some(Priority::High));
        assert_eq!(args.status(), Some(Status::InProgress));
    }

    #[test]
    fn invalid_priority_lists_allowed_values() {
        let err = parse(&["add", "-p", "asap"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err
            .to_string()
            .contains("Priority should be one of following values: low, medium, high, urgent"));
    }

    #[test]
    fn conflicting_flags_are_rejected() {
        assert_eq!(
            parse(&["check", "-c", "-i"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert_eq!(
            parse(&["delete", "--id", "x", "-t", "milk"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
        assert_eq!(
            parse(&["view", "-s", "done", "-i"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn update_is_an_alias_for_check() {
        let cli = parse(&["update", "--id", "abc", "-c"]).unwrap();
        let Some(Cmd::Check(args)) = cli.cmd else {
            panic!("expected check");
        };
        assert_eq!(args.id.as_deref(), Some("abc"));
        assert_eq!(args.status(), Some(Status::Done));
    }

    #[test]
    fn view_flags_build_filter() {
        let cli = parse(&["--data-file", "/tmp/t.json", "view", "-i", "-p", "low"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/t.json")));
        let Some(Cmd::View(args)) = cli.cmd else {
            panic!("expected view");
        };
        assert_eq!(
            args.filter(),
            TodoFilter {
                status: None,
                completed: Some(false),
                priority: Some(Priority::Low),
            }
        );
    }

    #[test]
    fn no_subcommand_defaults_to_view() {
        let cli = parse(&["-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.cmd.unwrap_or_default(), Cmd::View(_)));
    }

    #[test]
    fn fake_defaults_to_one() {
        let Some(Cmd::Fake(args)) = parse(&["fake"]).unwrap().cmd else {
            panic!("expected fake");
        };
        assert_eq!(args.number, 1);
    }
}

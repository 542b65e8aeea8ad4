use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toclido::{
    commands,
    config::Config,
    prompt::{PromptError, TerminalPrompter},
    Cli,
};

/// Exit status used when the user interrupts a prompt.
const INTERRUPTED_EXIT: i32 = 130;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.data_file, cli.verbose, cli.no_color);
    init_logging(&config);

    if !config.color {
        colored::control::set_override(false);
    }

    let cmd = cli.cmd.unwrap_or_default();
    tracing::debug!(store = %config.store.path().display(), ?cmd, "dispatching");

    let mut prompter = TerminalPrompter::new();
    match commands::run(&cmd, &config.store, &mut prompter) {
        Err(err) if is_interrupted(&err) => process::exit(INTERRUPTED_EXIT),
        result => result,
    }
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<PromptError>(),
        Some(PromptError::Interrupted)
    )
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

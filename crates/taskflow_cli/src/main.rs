//! Interactive console entry point.
//!
//! # Responsibility
//! - Parse flags, start logging, build the tracker and optional demo data.
//! - Hand stdin/stdout to the menu shell and flush logs on exit.

mod shell;

use anyhow::Context;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use shell::Shell;
use std::io;
use taskflow_core::{
    default_log_level, flush_logging, init_logging, seed_demo_data, TaskTracker,
};

#[derive(Parser)]
#[command(name = "taskflow", about = "Track projects, tasks and assignees in memory")]
struct Cli {
    /// Log level: trace|debug|info|warn|error. Defaults per build mode.
    #[arg(long, env = "TASKFLOW_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files. No logging when unset.
    #[arg(long, env = "TASKFLOW_LOG_DIR")]
    log_dir: Option<String>,

    /// Start with empty stores instead of the demo data set.
    /// The env form accepts `1|0`, `yes|no`, `on|off` and `true|false`.
    #[arg(
        long,
        env = "TASKFLOW_NO_DEMO",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    no_demo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let outcome = run(&cli);
    flush_logging();
    outcome
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut tracker = TaskTracker::new();
    let acting_user = if cli.no_demo {
        None
    } else {
        let seed = seed_demo_data(&mut tracker).context("failed to seed demo data")?;
        Some(seed.admin_id)
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut tracker, stdin.lock(), stdout.lock(), acting_user).run()
}

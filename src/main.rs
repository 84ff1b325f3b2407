//! tick - line-oriented personal task keeper
//!
//! Reads commands such as `todo`, `deadline`, `event`, `mark`, and `find`
//! from stdin, or a single command from argv, and keeps the task list in
//! one save file between sessions.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tick::command;
use tick::config::Config;
use tick::list::TaskList;
use tick::storage::FileStorage;
use tick::Result;

/// tick - personal task keeper
///
/// Tracks todos, deadlines, and events with line-oriented commands,
/// persisting the list to a single text file between sessions.
#[derive(Parser, Debug)]
#[command(name = "tick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the save file (overrides config and the platform default)
    #[arg(long, env = "TICK_FILE")]
    file: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, env = "TICK_CONFIG")]
    config: Option<PathBuf>,

    /// Suppress the interactive greeting and farewell
    #[arg(short, long)]
    quiet: bool,

    /// Run a single command and exit instead of entering the shell,
    /// e.g. `tick todo buy milk`
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let file = cli.file.clone().unwrap_or_else(|| config.data_file());
    let mut tasks = TaskList::load(Box::new(FileStorage::new(file)))?;

    if !cli.command.is_empty() {
        let line = cli.command.join(" ");
        println!("{}", command::dispatch(&line, &mut tasks)?);
        return Ok(());
    }

    shell(&mut tasks, cli.quiet)
}

/// Interactive read loop: one command per line, `bye` ends the session.
/// Command failures are reported and the loop keeps going; the task list
/// is still consistent with the save file after any of them.
fn shell(tasks: &mut TaskList, quiet: bool) -> Result<()> {
    if !quiet {
        println!("Hello! What can I keep track of for you?");
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "bye" {
            break;
        }
        match command::dispatch(line, tasks) {
            Ok(response) => println!("{response}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    if !quiet {
        println!("Bye! Your tasks are saved.");
    }
    Ok(())
}

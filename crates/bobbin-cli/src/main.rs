//! Bobbin CLI
//!
//! Keeps project files in sync with documents on the web.
//!
//! # Environment Variables
//!
//! - `BOBBIN_PROJECT`: project root, same as `--project`
//! - `RUST_LOG`: log filter when `--verbose` is not given (default: `error`)

mod cli;
mod commands;
mod context;
mod error;

use std::future::Future;
use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "bobbin", &mut std::io::stdout());
            Ok(())
        }
        Some(cmd) => {
            let root = context::resolve_root(cli.project.as_deref())?;
            tracing::debug!(root = %root.display(), "Resolved project root");
            execute_command(&root, cmd)
        }
        None => {
            println!("{} Bobbin CLI", "bobbin".green().bold());
            println!();
            println!("Run {} for available commands.", "bobbin --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so report output on stdout stays clean.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

fn execute_command(root: &Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init => commands::run_init(root),
        Commands::Run => block_on(commands::run_refresh(root))?,
        Commands::Watch { interval, runs } => block_on(commands::run_watch(root, interval, runs))?,
        Commands::Add {
            name,
            url,
            dest,
            file_type,
            disabled,
        } => commands::run_add(
            root,
            commands::NewEntry {
                name,
                url,
                dest,
                file_type,
                disabled,
            },
        )
        .map(|_| ()),
        Commands::Remove { entries } => commands::run_remove(root, &entries),
        Commands::Move { entry, position } => commands::run_move(root, &entry, position),
        Commands::List {
            sort,
            desc,
            search,
            json,
        } => commands::run_list(root, sort, desc, search.as_deref(), json),
        Commands::Enable { entry } => commands::run_set_enabled(root, &entry, true),
        Commands::Disable { entry } => commands::run_set_enabled(root, &entry, false),
        Commands::Rename { entry, name } => commands::run_rename(root, &entry, &name),
        Commands::SetUrl { entry, url } => commands::run_set_url(root, &entry, &url),
        Commands::SetType { entry, file_type } => commands::run_set_type(root, &entry, file_type),
        Commands::SetDest {
            entry,
            path,
            no_run,
        } => {
            let fetchable = commands::run_set_dest(root, &entry, path.as_deref())?;
            if fetchable && !no_run {
                block_on(commands::run_refresh(root))?
            } else {
                Ok(())
            }
        }
        Commands::ClearDest { entry } => commands::run_clear_dest(root, &entry),
        Commands::Open { entry } => commands::run_open(root, &entry),
        Commands::Config {
            auto_refresh,
            interval,
        } => commands::run_config(root, auto_refresh, interval),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Drive an async command to completion on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

//! Bookshelf - catalog books, magazines and DVDs from the command line

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bookshelf::cli::commands::{
    add::AddCommand, demo::DemoCommand, list::ListCommand, remove::RemoveCommand,
    search::SearchCommand, shell::ShellCommand, show::ShowCommand, CommandHandler,
};
use bookshelf::cli::{Cli, Commands, Session};
use bookshelf::config::Settings;
use bookshelf::{BookshelfError, Result};

/// Initialize tracing
///
/// An explicit `--log-level` wins, then `RUST_LOG`, then the settings file.
/// Logs always go to stderr so command output on stdout stays clean.
fn initialize_tracing(explicit: Option<&str>, fallback: &str) {
    let filter = match explicit {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Shell => Box::new(ShellCommand),
        Commands::Show => Box::new(ShowCommand),
        Commands::Search { term } => Box::new(SearchCommand::new(term)),
        Commands::List => Box::new(ListCommand),
        Commands::Add { item } => Box::new(AddCommand::new(item)),
        Commands::Remove { title, from } => Box::new(RemoveCommand::new(title, from)),
        Commands::Demo { force } => Box::new(DemoCommand::new(force)),
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let handler = handler_for(cli.command.unwrap_or(Commands::Shell));
    let mut session = if handler.needs_catalog() {
        Session::open(settings, cli.file.as_deref())?
    } else {
        Session::fresh(settings, cli.file.as_deref())?
    };
    debug!(command = handler.name(), file = session.file(), "Running command");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handler.execute(&mut session, &mut out)?;

    if handler.modifies_catalog() {
        session.save()?;
    }
    Ok(())
}

/// Print a short message for the user; the full error chain goes to the log only
fn report(err: &BookshelfError) {
    debug!(error = ?err, "Command failed");
    match err {
        BookshelfError::Validation(e) => eprintln!("Invalid input: {e}"),
        other => eprintln!("Error: {other}"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref());

    let fallback = settings
        .as_ref()
        .map(|s| s.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    initialize_tracing(
        cli.log_level.as_ref().map(|level| level.to_filter_directive()),
        &fallback,
    );

    match settings.and_then(|settings| run(cli, &settings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

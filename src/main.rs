//! Gesture Layouts - manage the layouts of a gesture-input keyboard
//!
//! Lists bundled and custom layouts, selects the active one, and curates the
//! history of custom layout files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gesture_layouts::cli::{AddArgs, ListArgs, RemoveArgs, SelectArgs, ValidateArgs};
use gesture_layouts::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Gesture Layouts - manage the layouts of a gesture-input keyboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List selectable layouts
    List(ListArgs),
    /// Select a layout by position
    Select(SelectArgs),
    /// Add a custom layout file and select it
    Add(AddArgs),
    /// Remove a custom layout from the history
    Remove(RemoveArgs),
    /// Validate a layout file
    Validate(ValidateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &cli.command {
        Command::List(args) => args.execute(&Config::load()?),
        Command::Select(args) => args.execute(&Config::load()?),
        Command::Add(args) => args.execute(&Config::load()?),
        Command::Remove(args) => args.execute(&Config::load()?),
        Command::Validate(args) => args.execute(),
    }
}

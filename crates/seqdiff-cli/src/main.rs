//! SeqDiff CLI
//!
//! Command-line interface for the SeqDiff engine

use clap::{Parser, Subcommand};
use seqdiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "seqdiff")]
#[command(about = "SeqDiff - deterministic char/word/line diffs", long_about = None)]
struct Cli {
    /// Emit structured logs on stderr (dev or json)
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two files (or two literal texts with --inline)
    Compare(commands::compare::CompareArgs),
    /// Configuration operations
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        init(profile);
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Config command
//!
//! Usage: seqdiff config show [--config <FILE>]

use clap::{Args, Subcommand};
use seqdiff_core::SeqDiffError;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective engine configuration as TOML
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// TOML engine config to load over the defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute config command
pub fn execute(args: ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ConfigCommand::Show(show_args) => execute_show(show_args),
    }
}

fn execute_show(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(args.config.as_deref())?;
    let text = toml::to_string(&config).map_err(|e| SeqDiffError::Serialization {
        reason: e.to_string(),
    })?;
    print!("{}", text);
    Ok(())
}

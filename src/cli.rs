use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Escala weekend duty rotation scheduler.
#[derive(Parser)]
#[command(name = "escala", version, about = "Weekend duty rotation scheduler")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a full year of duty assignments and store it.
    Generate(GenerateArgs),
    /// Print the stored assignments of a year.
    Show(ShowArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "escala.toml")]
    pub config: PathBuf,

    /// Override target year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Override roster file path from config.
    #[arg(short, long)]
    pub roster: Option<PathBuf>,

    /// Override data directory from config.
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "escala.toml")]
    pub config: PathBuf,

    /// Override target year from config.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Maximum number of assignments to print.
    #[arg(short, long, default_value_t = 50)]
    pub limit: usize,
}

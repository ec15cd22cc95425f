//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// chmigrate - scaffold ClickHouse migration files
#[derive(Parser, Debug)]
#[command(name = "chm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new ClickHouse migration file
    MakeMigration(MakeMigrationArgs),
}

/// Arguments for the make-migration command
#[derive(Args, Debug)]
pub struct MakeMigrationArgs {
    /// The name of the migration
    pub name: String,

    /// The table to migrate
    #[arg(long)]
    pub table: Option<String>,

    /// Path to the directory with migrations
    #[arg(long, env = "CHM_MIGRATIONS_PATH")]
    pub path: Option<String>,

    /// Treat --path as an already resolved absolute path
    #[arg(long)]
    pub realpath: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

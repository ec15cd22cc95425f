//! chmigrate CLI - scaffold ClickHouse migration files

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logger;

use cli::Cli;
use commands::make_migration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.global.verbose);

    match &cli.command {
        cli::Commands::MakeMigration(args) => make_migration::execute(args, &cli.global)
            .await
            .map(|_| ()),
    }
}

//! Make-migration command implementation - scaffolds a new migration file

use anyhow::{Context, Result};
use chm_core::{Config, MigrationRequest};
use std::path::PathBuf;

use crate::cli::{GlobalArgs, MakeMigrationArgs};
use crate::commands::common::{build_creator, load_config};
use crate::commands::hooks::run_post_create;

/// Execute the make-migration command, returning the created file's path
pub(crate) async fn execute(args: &MakeMigrationArgs, global: &GlobalArgs) -> Result<PathBuf> {
    let config = load_config(global)?;
    let request = build_request(args, global, &config);

    log::debug!(
        "Creating migration '{}' in {}",
        request.raw_name,
        request.directory.display()
    );

    let creator = build_creator(&config, &global.project_dir);
    let outcome = creator.create_file(&request);

    match &outcome {
        Ok(file) => println!("Migration created {}.", file.path.display()),
        Err(_) => eprintln!("Migration file not created."),
    }

    // Hooks run whether or not the file was created
    run_post_create(&config.post_create, &global.project_dir).await;

    let file = outcome.context("Failed to create migration")?;
    Ok(file.path)
}

/// Turn parsed arguments into a creation request.
///
/// A `--table` that is blank after trimming is treated as absent.
fn build_request(
    args: &MakeMigrationArgs,
    global: &GlobalArgs,
    config: &Config,
) -> MigrationRequest {
    if args.realpath && args.path.is_none() {
        log::debug!("--realpath has no effect without --path");
    }

    let table = args
        .table
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from);

    MigrationRequest {
        raw_name: args.name.clone(),
        table,
        directory: config.migrations_dir(
            &global.project_dir,
            args.path.as_deref(),
            args.realpath,
        ),
    }
}

#[cfg(test)]
#[path = "make_migration_test.rs"]
mod tests;

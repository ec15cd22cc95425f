//! Shared helpers for CLI commands

use anyhow::{Context, Result};
use chm_core::{Config, MigrationCreator, OsFs, SystemClock};
use chm_stub::{BundledStubs, StubDirectory, StubSource};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Load the project configuration from `--config` or the project directory
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    match &global.config {
        Some(path) => Config::load(Path::new(path)).context("Failed to load configuration file"),
        None => Config::load_from_dir(&global.project_dir)
            .context("Failed to load project configuration"),
    }
}

/// Stub source for the project: the override directory if configured, else the bundled stubs
pub(crate) fn stub_source(config: &Config, root: &Path) -> Arc<dyn StubSource> {
    match config.stubs_dir(root) {
        Some(dir) => Arc::new(StubDirectory::new(dir).with_fallback()),
        None => Arc::new(BundledStubs),
    }
}

/// Creator over the real filesystem and system clock
pub(crate) fn build_creator(config: &Config, root: &Path) -> MigrationCreator {
    MigrationCreator::new(
        Arc::new(OsFs),
        Arc::new(SystemClock),
        stub_source(config, root),
    )
    .with_extension(config.extension.clone())
}

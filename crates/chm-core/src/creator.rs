//! Migration file creation

use crate::error::{CoreError, CoreResult};
use crate::filename::{generate_file_name, parse_timestamp_prefix, Clock, FixedClock};
use crate::fs::MigrationFs;
use crate::name::MigrationName;
use chm_stub::{resolve_stub, StubContext, StubRenderer, StubSource};
use chrono::NaiveDateTime;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extension used when none is configured
pub const DEFAULT_EXTENSION: &str = "sql";

/// Per-migration options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Table the migration targets; selects the table stub when present
    pub table: Option<String>,
}

/// One request to create a migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Name as typed by the user
    pub raw_name: String,

    /// Table the migration targets
    pub table: Option<String>,

    /// Directory the file is written into
    pub directory: PathBuf,
}

/// A migration file that has been written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Clock reading the file name was built from
    pub timestamp: NaiveDateTime,

    /// Canonical snake_case name
    pub canonical_name: String,

    /// Class-style identifier substituted into the stub
    pub class_name: String,

    /// File name including extension
    pub file_name: String,

    /// Full path the file was written to
    pub path: PathBuf,
}

/// Creates migration files from stubs
pub struct MigrationCreator {
    fs: Arc<dyn MigrationFs>,
    clock: Arc<dyn Clock>,
    stubs: Arc<dyn StubSource>,
    renderer: StubRenderer<'static>,
    extension: String,
}

impl MigrationCreator {
    /// Create a creator over the given filesystem, clock and stub source
    pub fn new(
        fs: Arc<dyn MigrationFs>,
        clock: Arc<dyn Clock>,
        stubs: Arc<dyn StubSource>,
    ) -> Self {
        Self {
            fs,
            clock,
            stubs,
            renderer: StubRenderer::new(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use `extension` (without the dot) for generated files
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Extension generated files get
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Create a migration named `raw_name` in `directory` and return its path
    pub fn create(
        &self,
        raw_name: &str,
        directory: &Path,
        options: &CreateOptions,
    ) -> CoreResult<PathBuf> {
        let request = MigrationRequest {
            raw_name: raw_name.to_string(),
            table: options.table.clone(),
            directory: directory.to_path_buf(),
        };
        self.create_file(&request).map(|file| file.path)
    }

    /// Create the migration described by `request`.
    ///
    /// Never creates the directory and never overwrites an existing file.
    pub fn create_file(&self, request: &MigrationRequest) -> CoreResult<MigrationFile> {
        let name = MigrationName::parse(&request.raw_name).ok_or_else(|| CoreError::InvalidName {
            raw: request.raw_name.clone(),
        })?;
        let table = request
            .table
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let stub = resolve_stub(self.stubs.as_ref(), table)?;

        // Pin a single reading so the file name and the created_at placeholder agree
        let timestamp = self.clock.now();
        let stem = generate_file_name(name.as_str(), &FixedClock(timestamp));
        let file_name = format!("{}.{}", stem, self.extension);
        let path = request.directory.join(&file_name);

        if !self.fs.dir_exists(&request.directory) {
            return Err(CoreError::DirectoryNotFound {
                path: request.directory.display().to_string(),
            });
        }
        if self.fs.file_exists(&path) {
            return Err(CoreError::FileAlreadyExists {
                path: path.display().to_string(),
            });
        }
        self.ensure_unique_name(&request.directory, &name)?;

        let ctx = StubContext {
            class: name.class_name(),
            table: table.unwrap_or_default().to_string(),
            name: name.to_string(),
            created_at: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        let content = self.renderer.render(&stub, &ctx)?;

        self.write(&path, &content)?;
        log::debug!("Wrote {} stub to {}", stub.kind, path.display());

        Ok(MigrationFile {
            timestamp,
            canonical_name: name.to_string(),
            class_name: ctx.class,
            file_name,
            path,
        })
    }

    /// Reject a name that an existing migration in `dir` already uses.
    ///
    /// Two migrations with the same canonical name would share a class name.
    fn ensure_unique_name(&self, dir: &Path, name: &MigrationName) -> CoreResult<()> {
        let suffix = format!("_{}.{}", name, self.extension);
        let files = self.fs.list_files(dir).map_err(|e| CoreError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;

        let existing = files.into_iter().find(|file| {
            file.strip_suffix(&suffix)
                .and_then(parse_timestamp_prefix)
                .is_some()
        });

        match existing {
            Some(existing) => Err(CoreError::DuplicateMigration {
                class: name.class_name(),
                existing: dir.join(existing).display().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Write `content` to a new file at `path`, removing any partial file on failure
    fn write(&self, path: &Path, content: &str) -> CoreResult<()> {
        match self.fs.write_new(path, content) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(CoreError::FileAlreadyExists {
                    path: path.display().to_string(),
                })
            }
            Err(e) => {
                if self.fs.file_exists(path) {
                    if let Err(cleanup) = self.fs.remove_file(path) {
                        log::warn!(
                            "Could not remove partially written {}: {}",
                            path.display(),
                            cleanup
                        );
                    }
                }
                Err(CoreError::Write {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "creator_test.rs"]
mod tests;

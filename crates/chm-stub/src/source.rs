//! Stub kinds and the sources stubs are loaded from

use crate::error::{StubError, StubResult};
use rust_embed::Embed;
use std::fmt;
use std::path::{Path, PathBuf};

/// Stubs shipped inside the binary, from the crate's `stubs/` directory
#[derive(Embed)]
#[folder = "stubs/"]
struct BundledAssets;

/// Which stub a migration is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubKind {
    /// Empty migration with no table pre-filled
    Plain,
    /// Migration that alters an existing table
    Table,
}

impl StubKind {
    /// Pick the stub kind for an optional `--table` value.
    ///
    /// A table that is empty after trimming counts as absent.
    pub fn for_table(table: Option<&str>) -> Self {
        match table {
            Some(t) if !t.trim().is_empty() => StubKind::Table,
            _ => StubKind::Plain,
        }
    }

    /// File name of this stub, both in the bundled assets and in override directories
    pub fn file_name(&self) -> &'static str {
        match self {
            StubKind::Plain => "migration.stub",
            StubKind::Table => "migration.table.stub",
        }
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StubKind::Plain => write!(f, "plain"),
            StubKind::Table => write!(f, "table"),
        }
    }
}

/// A loaded stub. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    /// Kind this template was loaded for
    pub kind: StubKind,

    /// Raw template text with `{{ ... }}` placeholders
    pub content: String,
}

/// Somewhere stubs can be loaded from
pub trait StubSource: Send + Sync {
    /// Load the stub for `kind`, or fail with [`StubError::NotFound`]
    fn load(&self, kind: StubKind) -> StubResult<StubTemplate>;

    /// Human-readable description of the source, for logging
    fn describe(&self) -> String;
}

/// Stubs embedded in the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStubs;

impl BundledStubs {
    /// Load a bundled asset by file name
    fn get(name: &str) -> Option<String> {
        BundledAssets::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned())
    }
}

impl StubSource for BundledStubs {
    fn load(&self, kind: StubKind) -> StubResult<StubTemplate> {
        let content = Self::get(kind.file_name()).ok_or_else(|| StubError::NotFound {
            stub: kind.file_name().to_string(),
        })?;
        Ok(StubTemplate { kind, content })
    }

    fn describe(&self) -> String {
        "bundled stubs".to_string()
    }
}

/// Stubs loaded from a directory on disk, typically the project's
/// `stubs_path`, so teams can customise what new migrations look like.
#[derive(Debug, Clone)]
pub struct StubDirectory {
    root: PathBuf,
    fallback: bool,
}

impl StubDirectory {
    /// A directory source with no fallback: missing stubs are an error
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: false,
        }
    }

    /// Fall back to the bundled stubs for any stub the directory does not override
    pub fn with_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Directory stubs are read from
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StubSource for StubDirectory {
    fn load(&self, kind: StubKind) -> StubResult<StubTemplate> {
        let path = self.root.join(kind.file_name());

        if !path.is_file() {
            if self.fallback {
                log::debug!(
                    "No {} stub override at {}, using bundled stub",
                    kind,
                    path.display()
                );
                return BundledStubs.load(kind);
            }
            return Err(StubError::NotFound {
                stub: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| StubError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(StubTemplate { kind, content })
    }

    fn describe(&self) -> String {
        format!("stub directory {}", self.root.display())
    }
}

/// Resolve the stub for an optional table name.
///
/// A present, non-blank table selects [`StubKind::Table`]; anything else
/// selects [`StubKind::Plain`]. Load failures propagate unchanged.
pub fn resolve_stub(source: &dyn StubSource, table: Option<&str>) -> StubResult<StubTemplate> {
    let kind = StubKind::for_table(table);
    log::debug!("Resolving {} stub from {}", kind, source.describe());
    source.load(kind)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

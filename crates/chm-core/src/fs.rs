//! Filesystem access used by the migration creator

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The filesystem operations migration creation needs.
///
/// Implementations must be Send + Sync so a creator can be held across awaits.
pub trait MigrationFs: Send + Sync {
    /// Whether `path` exists and is a directory
    fn dir_exists(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`
    fn file_exists(&self, path: &Path) -> bool;

    /// File names (not paths) of the regular files directly inside `dir`
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Create `path` and write `content` to it. Must fail with
    /// [`io::ErrorKind::AlreadyExists`] rather than overwrite.
    fn write_new(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Remove the file at `path`
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl MigrationFs for OsFs {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn write_new(&self, path: &Path, content: &str) -> io::Result<()> {
        // Not atomic: a crash mid-write leaves a truncated file behind
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryFs;

#[cfg(any(test, feature = "test-support"))]
mod memory {
    use super::MigrationFs;
    use std::collections::{BTreeMap, BTreeSet};
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        dirs: BTreeSet<PathBuf>,
        files: BTreeMap<PathBuf, String>,
        fail_writes: Option<io::ErrorKind>,
    }

    /// In-memory filesystem for deterministic tests.
    ///
    /// A failing write still leaves the first half of the content behind,
    /// the way a real disk-full error would.
    #[derive(Default)]
    pub struct MemoryFs {
        state: Mutex<State>,
    }

    impl MemoryFs {
        /// Empty filesystem with no directories
        pub fn new() -> Self {
            Self::default()
        }

        /// Add an (empty) directory
        pub fn with_dir(self, dir: impl Into<PathBuf>) -> Self {
            self.state.lock().unwrap().dirs.insert(dir.into());
            self
        }

        /// Add a file; its parent directory is added too
        pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
            let path = path.into();
            {
                let mut state = self.state.lock().unwrap();
                if let Some(parent) = path.parent() {
                    state.dirs.insert(parent.to_path_buf());
                }
                state.files.insert(path, content.to_string());
            }
            self
        }

        /// Make every subsequent write fail with `kind`
        pub fn fail_writes(&self, kind: io::ErrorKind) {
            self.state.lock().unwrap().fail_writes = Some(kind);
        }

        /// Content of the file at `path`, if any
        pub fn read(&self, path: &Path) -> Option<String> {
            self.state.lock().unwrap().files.get(path).cloned()
        }

        /// Number of files currently stored
        pub fn file_count(&self) -> usize {
            self.state.lock().unwrap().files.len()
        }
    }

    impl MigrationFs for MemoryFs {
        fn dir_exists(&self, path: &Path) -> bool {
            self.state.lock().unwrap().dirs.contains(path)
        }

        fn file_exists(&self, path: &Path) -> bool {
            let state = self.state.lock().unwrap();
            state.files.contains_key(path) || state.dirs.contains(path)
        }

        fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
            let state = self.state.lock().unwrap();
            if !state.dirs.contains(dir) {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
            }
            Ok(state
                .files
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect())
        }

        fn write_new(&self, path: &Path, content: &str) -> io::Result<()> {
            let mut state = self.state.lock().unwrap();
            if state.files.contains_key(path) {
                return Err(io::Error::new(io::ErrorKind::AlreadyExists, "file exists"));
            }
            if let Some(kind) = state.fail_writes {
                let partial: String = content.chars().take(content.chars().count() / 2).collect();
                state.files.insert(path.to_path_buf(), partial);
                return Err(io::Error::new(kind, "simulated write failure"));
            }
            state.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn remove_file(&self, path: &Path) -> io::Result<()> {
            self.state
                .lock()
                .unwrap()
                .files
                .remove(path)
                .map(|_| ())
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }
}

//! Configuration types and parsing for chmigrate.yml

use crate::creator::DEFAULT_EXTENSION;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names looked up in the project directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["chmigrate.yml", "chmigrate.yaml"];

/// Project configuration from chmigrate.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory migrations are written to, relative to the project root
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,

    /// Directory with stub overrides, relative to the project root
    #[serde(default)]
    pub stubs_path: Option<String>,

    /// Extension of generated migration files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Shell commands run after every creation attempt
    #[serde(default)]
    pub post_create: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_path: default_migrations_path(),
            stubs_path: None,
            extension: default_extension(),
            post_create: Vec::new(),
        }
    }
}

fn default_migrations_path() -> String {
    "database/clickhouse-migrations".to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> CoreResult<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory.
    ///
    /// Looks for chmigrate.yml or chmigrate.yaml and falls back to defaults
    /// when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                return Self::load(&path);
            }
        }
        log::debug!("No config file in {}, using defaults", dir.display());
        Ok(Self::default())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.migrations_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_path cannot be empty".to_string(),
            });
        }

        if self.extension.is_empty()
            || self.extension.contains(['.', '/', '\\'])
            || self.extension.chars().any(char::is_whitespace)
        {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "extension '{}' must be a bare extension such as 'sql'",
                    self.extension
                ),
            });
        }

        if self.post_create.iter().any(|c| c.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "post_create commands cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve the directory migrations are written to.
    ///
    /// An explicit `path_override` wins over `migrations_path`; it is taken
    /// as-is when `realpath` is set and joined onto `root` otherwise.
    pub fn migrations_dir(
        &self,
        root: &Path,
        path_override: Option<&str>,
        realpath: bool,
    ) -> PathBuf {
        match path_override {
            Some(path) if realpath => PathBuf::from(path),
            Some(path) => root.join(path),
            None => root.join(&self.migrations_path),
        }
    }

    /// Absolute stub override directory, if one is configured
    pub fn stubs_dir(&self, root: &Path) -> Option<PathBuf> {
        self.stubs_path.as_ref().map(|p| root.join(p))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

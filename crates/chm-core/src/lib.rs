//! chm-core - Core library for chmigrate
//!
//! This crate turns a free-text migration name into a timestamped ClickHouse
//! migration file: name normalization, file naming, configuration, and the
//! [`MigrationCreator`] that ties them to a stub from `chm-stub`.
//!
//! Time and the filesystem are reached only through the [`Clock`] and
//! [`MigrationFs`] traits so creation can be tested without real disk or time.

pub mod config;
pub mod creator;
pub mod error;
pub mod filename;
pub mod fs;
pub mod name;

pub use config::Config;
pub use creator::{CreateOptions, MigrationCreator, MigrationFile, MigrationRequest};
pub use error::{CoreError, CoreResult};
pub use filename::{
    generate_file_name, parse_timestamp_prefix, timestamp_prefix, Clock, FixedClock, SystemClock,
};
pub use fs::{MigrationFs, OsFs};
pub use name::{class_name, normalize, MigrationName};

#[cfg(any(test, feature = "test-support"))]
pub use fs::MemoryFs;

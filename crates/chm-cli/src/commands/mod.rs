//! CLI command implementations

pub(crate) mod common;
pub(crate) mod hooks;
pub(crate) mod make_migration;

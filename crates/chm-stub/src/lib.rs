//! chm-stub - Stub templates for chmigrate
//!
//! This crate resolves which stub a new migration is generated from
//! (plain or table-specific), loads it from the bundled assets or a
//! user override directory, and renders its `{{ class }}` / `{{ table }}`
//! placeholders with minijinja.

pub mod error;
pub mod render;
pub mod source;

pub use error::{StubError, StubResult};
pub use render::{StubContext, StubRenderer};
pub use source::{resolve_stub, BundledStubs, StubDirectory, StubKind, StubSource, StubTemplate};

//! Configuration loading: files, directories and in-memory mappings.
//!
//! Responsibilities:
//! - Resolve source prefixes and run sources through the format loaders.
//! - Walk directories of sources.
//! - Provide the builder-pattern `StoreBuilder` and the `LoaderOptions` toggles.
//! - Define the crate's error type.
//!
//! Does NOT handle:
//! - Parsing individual formats (see `formats`).
//! - Storing or resolving dot-paths (see `store`).
//!
//! Invariants / Assumptions:
//! - Unsupported files are skipped unless `ignore_unsupported_file_types` is off.
//! - Directory loads are fail-fast and do not roll back earlier files.

mod builder;
pub(crate) mod directory;
mod error;
mod options;
pub(crate) mod pipeline;

#[cfg(test)]
mod tests;

pub use builder::StoreBuilder;
pub use error::{Result, StoreError};
pub use options::LoaderOptions;

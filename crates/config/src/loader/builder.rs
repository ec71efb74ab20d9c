//! Store builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `StoreBuilder` for configuring a `Store`
//!   before any load: loader options and custom format handlers.
//!
//! Does NOT handle:
//! - Loading sources (see `pipeline.rs` and `directory.rs`).
//!
//! Invariants / Assumptions:
//! - Individual `with_*` toggles override the matching field of any
//!   `LoaderOptions` passed earlier via `with_options`.
//! - Registering a handler twice for one extension keeps the last one.

use super::options::LoaderOptions;
use crate::formats::{FormatHandler, FormatRegistry};
use crate::store::Store;

/// Builder for a configured `Store`.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    options: LoaderOptions,
    formats: FormatRegistry,
}

impl StoreBuilder {
    /// Create a new builder with default options and no custom handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all loader options at once.
    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set whether files with no handler are skipped (`true`) or rejected.
    pub fn with_ignore_unsupported_file_types(mut self, ignore: bool) -> Self {
        self.options.ignore_unsupported_file_types = ignore;
        self
    }

    /// Set whether INI `[section]` headers produce nested mappings.
    pub fn with_ini_process_sections(mut self, process: bool) -> Self {
        self.options.ini_process_sections = process;
        self
    }

    /// Set whether unquoted INI values are type-inferred.
    pub fn with_ini_typed_values(mut self, typed: bool) -> Self {
        self.options.ini_typed_values = typed;
        self
    }

    /// Register a handler for a file extension.
    pub fn with_format(mut self, extension: &str, handler: impl FormatHandler + 'static) -> Self {
        self.formats.register(extension, handler);
        self
    }

    /// Build the store.
    pub fn build(self) -> Store {
        Store::from_parts(self.options, self.formats)
    }
}

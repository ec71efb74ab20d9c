//! The configuration store.
//!
//! Responsibilities:
//! - Own the flattened dot-path namespace, the loader options and the custom
//!   format handlers.
//! - Expose load operations (delegated to `loader`), lookups and reset.
//!
//! Does NOT handle:
//! - Cross-thread sharing (see `shared.rs`).
//! - Parsing source files (see `formats`).
//!
//! Invariants:
//! - The namespace changes only through load operations and `reset`.
//! - Lookups never fail; absence is `None`, a default, or `false`.
//! - `get`, `get_or` and `exists` agree on every path.

mod flatten;
mod lookup;
mod shared;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::formats::{FormatHandler, FormatRegistry};
use crate::loader::{LoaderOptions, Result, StoreBuilder, StoreError, directory, pipeline};
use crate::types::{ConfigValue, Mapping, Namespace};

pub(crate) use flatten::{flatten, join_path};
pub use shared::{SharedStore, global};

/// A dot-addressed configuration store.
///
/// ```
/// use lite_config::{ConfigValue, Mapping, Store};
///
/// let mut store = Store::new();
/// let app: Mapping = vec![("name", ConfigValue::from("Example"))].into_iter().collect();
/// store.load_mapping(vec![("app", ConfigValue::from(app))].into_iter().collect(), None);
///
/// assert_eq!(store.get_str("app.name"), Some("Example"));
/// assert!(store.exists("app"));
/// ```
#[derive(Debug, Default)]
pub struct Store {
    namespace: Namespace,
    options: LoaderOptions,
    formats: FormatRegistry,
}

impl Store {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options.
    pub fn with_options(options: LoaderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Start building a store with options and custom format handlers.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(options: LoaderOptions, formats: FormatRegistry) -> Self {
        Self {
            namespace: Namespace::new(),
            options,
            formats,
        }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Change the loader options used by subsequent loads.
    pub fn set_options(&mut self, options: LoaderOptions) {
        self.options = options;
    }

    /// Register a handler for an extension the built-in formats do not cover.
    pub fn register_format(&mut self, extension: &str, handler: impl FormatHandler + 'static) {
        self.formats.register(extension, handler);
    }

    pub(crate) fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub(crate) fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    /// Load an in-memory mapping, optionally under `prefix`.
    pub fn load_mapping(&mut self, data: Mapping, prefix: Option<&str>) {
        pipeline::load_mapping(self, &data, prefix);
    }

    /// Load one source file.
    ///
    /// With `filename_as_prefix`, keys are prefixed with the file stem; a
    /// `custom_prefix` is prepended to that (or used alone).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if its root is
    /// not a mapping, or if its type is unsupported and
    /// `ignore_unsupported_file_types` is off.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        filename_as_prefix: bool,
        custom_prefix: Option<&str>,
    ) -> Result<()> {
        pipeline::load_file(self, path.as_ref(), filename_as_prefix, custom_prefix)
    }

    /// Load every file directly inside `path`, returning how many were visited.
    ///
    /// # Errors
    ///
    /// Fails fast on the first file that fails to load. Entries from files
    /// loaded before it stay in the store.
    pub fn load_dir(
        &mut self,
        path: impl AsRef<Path>,
        filename_as_prefix: bool,
        custom_prefix: Option<&str>,
    ) -> Result<usize> {
        directory::load_dir(self, path.as_ref(), filename_as_prefix, custom_prefix)
    }

    /// Resolve a dot-path.
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        lookup::resolve(&self.namespace, path)
    }

    /// Resolve a dot-path, returning `default` when it is absent.
    pub fn get_or(&self, path: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        match self.get(path) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(ConfigValue::as_str)
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(ConfigValue::as_i64)
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(ConfigValue::as_f64)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(ConfigValue::as_bool)
    }

    /// Deserialize the value at `path` into `T`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conversion` if the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };
        let conversion = |source| StoreError::Conversion {
            path: path.to_string(),
            source,
        };
        let json = serde_json::to_value(value).map_err(conversion)?;
        serde_json::from_value(json).map(Some).map_err(conversion)
    }

    /// The whole flat namespace.
    pub fn all(&self) -> &Namespace {
        &self.namespace
    }

    pub fn len(&self) -> usize {
        self.namespace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Remove every entry. Options and registered handlers are kept.
    pub fn reset(&mut self) {
        tracing::debug!(entries = self.namespace.len(), "Resetting configuration store");
        self.namespace.clear();
    }
}

//! Thread-safe store wrapper and the process-wide default instance.
//!
//! Responsibilities:
//! - Serialize mutations (loads, reset, option changes) behind a write lock.
//! - Let reads (`get`, `exists`, `all`) run concurrently under a read lock.
//! - Provide `global()` for callers that want one store per process.
//!
//! Does NOT handle:
//! - Any loading or lookup logic of its own; everything delegates to `Store`.
//!
//! Invariants:
//! - Reads return owned values so no lock guard escapes a call.
//! - A poisoned lock is recovered: a panicking writer can leave a partially
//!   applied load behind, which is the same outcome as a failed load.

use std::path::Path;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Store;
use crate::formats::FormatHandler;
use crate::loader::{LoaderOptions, Result};
use crate::types::{ConfigValue, Mapping, Namespace};

/// A `Store` that can be shared across threads.
#[derive(Debug, Default)]
pub struct SharedStore {
    inner: RwLock<Store>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: RwLock::new(store),
        }
    }

    /// Acquire the read lock for several lookups against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the write lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_options(&self, options: LoaderOptions) {
        self.write().set_options(options);
    }

    pub fn options(&self) -> LoaderOptions {
        *self.read().options()
    }

    pub fn register_format(&self, extension: &str, handler: impl FormatHandler + 'static) {
        self.write().register_format(extension, handler);
    }

    pub fn load_mapping(&self, data: Mapping, prefix: Option<&str>) {
        self.write().load_mapping(data, prefix);
    }

    pub fn load_file(
        &self,
        path: impl AsRef<Path>,
        filename_as_prefix: bool,
        custom_prefix: Option<&str>,
    ) -> Result<()> {
        self.write().load_file(path, filename_as_prefix, custom_prefix)
    }

    pub fn load_dir(
        &self,
        path: impl AsRef<Path>,
        filename_as_prefix: bool,
        custom_prefix: Option<&str>,
    ) -> Result<usize> {
        self.write().load_dir(path, filename_as_prefix, custom_prefix)
    }

    pub fn get(&self, path: &str) -> Option<ConfigValue> {
        self.read().get(path).cloned()
    }

    pub fn get_or(&self, path: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.read().get_or(path, default)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.read().exists(path)
    }

    /// Snapshot of the whole flat namespace.
    pub fn all(&self) -> Namespace {
        self.read().all().clone()
    }

    pub fn reset(&self) {
        self.write().reset();
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self::new(store)
    }
}

/// The process-wide default store, created empty on first use.
pub fn global() -> &'static SharedStore {
    static GLOBAL: OnceLock<SharedStore> = OnceLock::new();
    GLOBAL.get_or_init(SharedStore::default)
}

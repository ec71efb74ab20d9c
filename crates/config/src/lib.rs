//! Format-agnostic configuration store with dot-path lookup.
//!
//! This crate loads configuration from in-memory mappings, single files and
//! directories of JSON, INI, TOML and YAML files (plus custom formats), and
//! flattens everything into one dot-addressed namespace:
//!
//! ```no_run
//! use lite_config::Store;
//!
//! let mut store = Store::new();
//! store.load_dir("config", true, None)?;
//!
//! let host = store.get_str("database.primary.host");
//! let port = store.get_or("database.primary.port", 5432);
//! # Ok::<(), lite_config::StoreError>(())
//! ```

pub mod constants;
mod formats;
mod loader;
mod store;
pub mod types;

pub use formats::{Format, FormatHandler, FormatRegistry};
pub use loader::{LoaderOptions, Result, StoreBuilder, StoreError};
pub use store::{SharedStore, Store, global};
pub use types::{ConfigValue, Mapping, Namespace};

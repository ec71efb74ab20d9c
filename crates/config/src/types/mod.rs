//! Value type definitions for lite-config.
//!
//! Responsibilities:
//! - Define `ConfigValue`, the tagged union every source is converted into.
//! - Define `Mapping`, the ordered string-keyed container for nested values.
//! - Define `Namespace`, the flat dot-path → value map a store holds.
//!
//! Does NOT handle:
//! - Flattening or lookup (see `store`).
//! - Parsing files (see `formats`).
//!
//! Invariants:
//! - Every format produces values of these types; no format-specific value
//!   type escapes the `formats` module.

mod mapping;
mod value;

use std::collections::BTreeMap;

pub use mapping::Mapping;
pub use value::ConfigValue;

/// The flat dot-path namespace held by a store.
pub type Namespace = BTreeMap<String, ConfigValue>;

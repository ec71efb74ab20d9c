//! Loader option values.
//!
//! Responsibilities:
//! - Define the toggles that shape how sources are loaded.
//! - Provide a `Default` implementation with the documented defaults.
//!
//! Does NOT handle:
//! - Applying the options (see `pipeline.rs` and the `formats` module).
//!
//! Invariants:
//! - Defaults: unsupported files ignored, INI sections processed, INI values typed.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IGNORE_UNSUPPORTED_FILE_TYPES, DEFAULT_INI_PROCESS_SECTIONS, DEFAULT_INI_TYPED_VALUES,
};

/// Options applied to every load performed by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Skip files with no built-in or custom handler instead of failing.
    pub ignore_unsupported_file_types: bool,
    /// Turn INI `[section]` headers into nested mappings.
    pub ini_process_sections: bool,
    /// Infer bool/null/integer/float for unquoted INI values.
    pub ini_typed_values: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            ignore_unsupported_file_types: DEFAULT_IGNORE_UNSUPPORTED_FILE_TYPES,
            ini_process_sections: DEFAULT_INI_PROCESS_SECTIONS,
            ini_typed_values: DEFAULT_INI_TYPED_VALUES,
        }
    }
}

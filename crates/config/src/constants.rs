//! Centralized constants for lite-config.
//!
//! This module contains the path delimiter, built-in file extensions and
//! default option values used across modules.

// =============================================================================
// Namespace
// =============================================================================

/// Separator between dot-path segments.
pub const PATH_DELIMITER: char = '.';

// =============================================================================
// Built-in format extensions
// =============================================================================

/// Extension for JSON sources.
pub const JSON_EXTENSION: &str = "json";

/// Extension for INI sources.
pub const INI_EXTENSION: &str = "ini";

/// Extension for TOML sources.
pub const TOML_EXTENSION: &str = "toml";

/// Extensions for YAML sources.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

// =============================================================================
// Loader option defaults
// =============================================================================

/// Unsupported file types are skipped rather than reported.
pub const DEFAULT_IGNORE_UNSUPPORTED_FILE_TYPES: bool = true;

/// INI `[section]` headers produce nested mappings.
pub const DEFAULT_INI_PROCESS_SECTIONS: bool = true;

/// Unquoted INI values are inferred as bool/null/integer/float.
pub const DEFAULT_INI_TYPED_VALUES: bool = true;

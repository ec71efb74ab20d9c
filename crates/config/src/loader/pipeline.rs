//! Loading pipeline: prefix resolution → format loader → flattening.
//!
//! Responsibilities:
//! - Resolve the effective prefix from the file stem and/or a custom prefix.
//! - Read a source through the format loader and validate its root shape.
//! - Apply the unsupported-format policy.
//! - Hand accepted mappings to the flattening engine.
//!
//! Does NOT handle:
//! - Enumerating directories (see `directory.rs`).
//! - Parsing individual formats (see `formats`).
//!
//! Invariants:
//! - A source contributes entries only when it parsed to a mapping; empty,
//!   skipped and failing sources leave the namespace untouched.
//! - Both prefixes present → `custom.stem`; one present → that one alone.

use std::path::Path;

use super::error::{Result, StoreError};
use crate::formats::{SourceContent, read_source};
use crate::store::{Store, flatten, join_path};
use crate::types::{ConfigValue, Mapping};

/// Compute the prefix a source's keys are stored under.
pub(crate) fn resolve_prefix(
    path: &Path,
    filename_as_prefix: bool,
    custom_prefix: Option<&str>,
) -> Option<String> {
    let stem = if filename_as_prefix {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    } else {
        None
    };

    match (custom_prefix, stem) {
        (Some(custom), Some(stem)) => Some(join_path(custom, &stem)),
        (Some(custom), None) => Some(custom.to_string()),
        (None, stem) => stem,
    }
}

pub(crate) fn load_mapping(store: &mut Store, data: &Mapping, prefix: Option<&str>) {
    let written = flatten(store.namespace_mut(), data, prefix);
    tracing::debug!(
        prefix = prefix.unwrap_or_default(),
        keys = data.len(),
        written,
        "Flattened mapping into store"
    );
}

pub(crate) fn load_file(
    store: &mut Store,
    path: &Path,
    filename_as_prefix: bool,
    custom_prefix: Option<&str>,
) -> Result<()> {
    let prefix = resolve_prefix(path, filename_as_prefix, custom_prefix);

    match read_source(path, store.formats(), store.options())? {
        SourceContent::Parsed {
            value: ConfigValue::Mapping(mapping),
            format,
        } => {
            tracing::debug!(path = %path.display(), format = %format, "Loaded config source");
            load_mapping(store, &mapping, prefix.as_deref());
            Ok(())
        }
        SourceContent::Parsed { value, format } => {
            tracing::debug!(
                path = %path.display(),
                format = %format,
                root = value.type_name(),
                "Rejected config source with non-mapping root"
            );
            Err(StoreError::MalformedSource {
                path: path.to_path_buf(),
                format,
            })
        }
        SourceContent::Empty => {
            tracing::debug!(path = %path.display(), "Config source has no content");
            Ok(())
        }
        SourceContent::Unsupported { extension } => {
            if store.options().ignore_unsupported_file_types {
                tracing::debug!(
                    path = %path.display(),
                    extension = %extension,
                    "Skipping unsupported config file type"
                );
                Ok(())
            } else {
                Err(StoreError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension,
                })
            }
        }
    }
}

//! Directory walker for configuration sources.
//!
//! Responsibilities:
//! - List the regular files directly inside a directory.
//! - Feed each one to the loading pipeline in file-name order.
//!
//! Does NOT handle:
//! - Recursing into subdirectories.
//! - Format detection (every listed file goes through `pipeline::load_file`,
//!   which applies the unsupported-format policy).
//!
//! Invariants:
//! - Only files whose name has an extension are listed; hidden dotfiles and
//!   extension-less files are skipped.
//! - Fail-fast: the first failing file aborts the walk, and entries merged
//!   from earlier files are kept.

use std::path::{Path, PathBuf};

use super::error::{Result, StoreError};
use super::pipeline;
use crate::store::Store;

pub(crate) fn load_dir(
    store: &mut Store,
    dir: &Path,
    filename_as_prefix: bool,
    custom_prefix: Option<&str>,
) -> Result<usize> {
    let files = list_sources(dir)?;

    for (index, path) in files.iter().enumerate() {
        if let Err(e) = pipeline::load_file(store, path, filename_as_prefix, custom_prefix) {
            tracing::warn!(
                dir = %dir.display(),
                path = %path.display(),
                loaded = index,
                error = %e,
                "Aborting directory load"
            );
            return Err(e);
        }
    }

    tracing::info!(dir = %dir.display(), files = files.len(), "Loaded config directory");
    Ok(files.len())
}

/// Candidate source files directly inside `dir`, sorted by path.
fn list_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();

        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden || path.extension().is_none() || !path.is_file() {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

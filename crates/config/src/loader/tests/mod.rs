//! Tests for the loading pipeline.
//!
//! Responsibilities:
//! - Test in-memory mapping loads, prefixing and lookups.
//! - Test single-file loads across formats, prefix resolution and policies.
//! - Test directory loads, ordering and fail-fast behaviour.
//! - Test builder configuration and custom format handlers.
//!
//! Invariants:
//! - Every test builds its own `Store`; none touch the process-wide `global()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

use crate::types::{ConfigValue, Mapping};


/// Convert a JSON object literal into a `Mapping`.
pub fn mapping(value: serde_json::Value) -> Mapping {
    match ConfigValue::from(value) {
        ConfigValue::Mapping(map) => map,
        other => panic!("expected mapping, got {other:?}"),
    }
}

pub fn value(value: serde_json::Value) -> ConfigValue {
    ConfigValue::from(value)
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// A temp directory holding one source per built-in format.
pub fn mixed_format_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write_file(
        dir.path(),
        "app.json",
        &json!({"name": "Example", "ports": [80, 443]}).to_string(),
    );
    write_file(
        dir.path(),
        "database.ini",
        "[primary]\nhost = db.local\nport = 5432\n",
    );
    write_file(dir.path(), "cache.toml", "ttl = 60\nenabled = true\n");
    write_file(dir.path(), "features.yaml", "beta: false\nflags:\n  - search\n");
    dir
}

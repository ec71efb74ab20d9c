//! YAML sources, parsed with `serde_yaml`.
//!
//! Non-string scalar keys (`1:`, `true:`) are stringified so they stay
//! addressable as path segments. Composite keys cannot be addressed and are
//! reported as parse errors. Tags are dropped in favour of the tagged value.

use std::path::Path;

use serde_yaml::Value;

use crate::loader::{Result, StoreError};
use crate::types::{ConfigValue, Mapping};

pub(crate) const NAME: &str = "yaml";

/// Parse a YAML document. Blank documents and a bare `~`/`null` carry no content.
pub(crate) fn parse(text: &str, path: &Path) -> Result<Option<ConfigValue>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let value: Value =
        serde_yaml::from_str(text).map_err(|e| StoreError::parse(path, NAME, e.to_string()))?;

    match value {
        Value::Null => Ok(None),
        other => convert(other)
            .map(Some)
            .map_err(|message| StoreError::parse(path, NAME, message)),
    }
}

fn convert(value: Value) -> std::result::Result<ConfigValue, String> {
    Ok(match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => ConfigValue::Integer(i),
            None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(items) => ConfigValue::Sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Value::Mapping(map) => {
            let mut mapping = Mapping::new();
            for (key, value) in map {
                mapping.insert(key_segment(key)?, convert(value)?);
            }
            ConfigValue::Mapping(mapping)
        }
        Value::Tagged(tagged) => convert(tagged.value)?,
    })
}

fn key_segment(key: Value) -> std::result::Result<String, String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Tagged(tagged) => key_segment(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}

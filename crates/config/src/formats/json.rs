//! JSON sources, parsed with `serde_json` in document order.

use std::path::Path;

use crate::loader::{Result, StoreError};
use crate::types::ConfigValue;

pub(crate) const NAME: &str = "json";

/// Parse a JSON document. Blank documents and a bare `null` carry no content.
pub(crate) fn parse(text: &str, path: &Path) -> Result<Option<ConfigValue>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| StoreError::parse(path, NAME, e.to_string()))?;

    match value {
        serde_json::Value::Null => Ok(None),
        other => Ok(Some(ConfigValue::from(other))),
    }
}

//! INI sources.
//!
//! Responsibilities:
//! - Parse `key = value` lines, `[section]` headers and `;`/`#` comments.
//! - Build nested mappings for sections when section processing is on,
//!   otherwise merge every key into the root.
//! - Support `key[] = v` (append to a sequence) and `key[name] = v`
//!   (insert into a sub-mapping).
//! - Infer scalar types for unquoted values when typing is on.
//!
//! Does NOT handle:
//! - Variable or constant interpolation inside values.
//! - Multi-line values.
//!
//! Invariants:
//! - Quoted values are always strings.
//! - A source with no keys and no sections carries no content.

use std::path::Path;

use crate::loader::{LoaderOptions, Result, StoreError};
use crate::types::{ConfigValue, Mapping};

pub(crate) const NAME: &str = "ini";

pub(crate) fn parse(
    text: &str,
    path: &Path,
    options: &LoaderOptions,
) -> Result<Option<ConfigValue>> {
    let mut root = Mapping::new();
    let mut section: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let line_error = |message: &str| {
            StoreError::parse(path, NAME, format!("line {}: {message}", index + 1))
        };

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or_else(|| line_error("unterminated section header"))?
                .trim();
            if options.ini_process_sections {
                as_mapping_mut(root.entry_or_insert_with(name, || Mapping::new().into()))
                    .map_err(|message| line_error(message))?;
            }
            section = Some(name.to_string());
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| line_error("expected `key = value`"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(line_error("empty key"));
        }
        let value = parse_value(value.trim(), options.ini_typed_values)
            .map_err(|message| line_error(message))?;

        let target = match &section {
            Some(name) if options.ini_process_sections => {
                as_mapping_mut(root.entry_or_insert_with(name, || Mapping::new().into()))
                    .map_err(|message| line_error(message))?
            }
            _ => &mut root,
        };
        assign(target, key, value).map_err(|message| line_error(message))?;
    }

    if root.is_empty() {
        Ok(None)
    } else {
        Ok(Some(ConfigValue::Mapping(root)))
    }
}

/// Store `value` under `key`, honouring the `name[]` and `name[sub]` forms.
fn assign(
    target: &mut Mapping,
    key: &str,
    value: ConfigValue,
) -> std::result::Result<(), &'static str> {
    let Some((name, rest)) = key.split_once('[') else {
        target.insert(key, value);
        return Ok(());
    };
    let sub = rest.strip_suffix(']').ok_or("unterminated `[` in key")?.trim();
    let slot =
        target.entry_or_insert_with(name.trim_end(), || ConfigValue::Sequence(Vec::new()));

    if sub.is_empty() {
        match slot {
            ConfigValue::Sequence(items) => items.push(value),
            ConfigValue::Mapping(map) => {
                let next = next_index(map).ok_or("sequence index overflow")?;
                map.insert(next.to_string(), value);
            }
            scalar => *scalar = ConfigValue::Sequence(vec![value]),
        }
    } else {
        as_mapping_mut(slot)?.insert(sub, value);
    }
    Ok(())
}

/// Coerce a slot into a mapping; sequences keep their items under index keys.
fn as_mapping_mut(slot: &mut ConfigValue) -> std::result::Result<&mut Mapping, &'static str> {
    if !matches!(slot, ConfigValue::Mapping(_)) {
        let mapping = match std::mem::take(slot) {
            ConfigValue::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            _ => Mapping::new(),
        };
        *slot = ConfigValue::Mapping(mapping);
    }

    let ConfigValue::Mapping(map) = slot else {
        return Err("value cannot hold named keys");
    };
    Ok(map)
}

/// Next free numeric key when appending with `name[]` to a mapping.
///
/// `None` when the largest existing index is already `usize::MAX`.
fn next_index(map: &Mapping) -> Option<usize> {
    match map.keys().filter_map(|key| key.parse::<usize>().ok()).max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}

fn parse_value(raw: &str, typed: bool) -> std::result::Result<ConfigValue, &'static str> {
    if let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let body = &raw[1..];
        let end = body.find(quote).ok_or("unterminated quoted value")?;
        let trailing = body[end + 1..].trim_start();
        if !(trailing.is_empty() || trailing.starts_with(';') || trailing.starts_with('#')) {
            return Err("unexpected text after quoted value");
        }
        return Ok(ConfigValue::String(body[..end].to_string()));
    }

    let raw = match raw.find(';') {
        Some(comment) => raw[..comment].trim_end(),
        None => raw,
    };

    if typed {
        Ok(infer_scalar(raw))
    } else {
        Ok(ConfigValue::String(raw.to_string()))
    }
}

fn infer_scalar(raw: &str) -> ConfigValue {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => return ConfigValue::Bool(true),
        "false" | "off" | "no" | "none" => return ConfigValue::Bool(false),
        "null" => return ConfigValue::Null,
        _ => {}
    }

    if let Ok(integer) = raw.parse::<i64>() {
        return ConfigValue::Integer(integer);
    }

    // Rust accepts "inf"/"NaN" as floats; INI values like those stay text.
    let numeric = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if numeric
        && raw.chars().any(|c| c.is_ascii_digit())
        && let Ok(float) = raw.parse::<f64>()
    {
        return ConfigValue::Float(float);
    }

    ConfigValue::String(raw.to_string())
}

//! TOML sources, the native structured format for Rust applications.
//!
//! A TOML document is always a table, so it is read as a literal mapping.
//! Datetimes have no `ConfigValue` counterpart and are kept as their
//! RFC 3339 text.

use std::path::Path;

use crate::loader::{Result, StoreError};
use crate::types::{ConfigValue, Mapping};

pub(crate) const NAME: &str = "toml";

pub(crate) fn parse(text: &str, path: &Path) -> Result<Option<ConfigValue>> {
    let table: ::toml::Table =
        ::toml::from_str(text).map_err(|e| StoreError::parse(path, NAME, e.to_string()))?;
    Ok(Some(convert_table(table)))
}

fn convert_table(table: ::toml::Table) -> ConfigValue {
    ConfigValue::Mapping(
        table
            .into_iter()
            .map(|(key, value)| (key, convert(value)))
            .collect::<Mapping>(),
    )
}

fn convert(value: ::toml::Value) -> ConfigValue {
    match value {
        ::toml::Value::String(s) => ConfigValue::String(s),
        ::toml::Value::Integer(i) => ConfigValue::Integer(i),
        ::toml::Value::Float(f) => ConfigValue::Float(f),
        ::toml::Value::Boolean(b) => ConfigValue::Bool(b),
        ::toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
        ::toml::Value::Array(items) => {
            ConfigValue::Sequence(items.into_iter().map(convert).collect())
        }
        ::toml::Value::Table(table) => convert_table(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tables_and_arrays() {
        let text = r#"
app = "Example"
ports = [8080, 8081]

[database]
host = "localhost"
pool = 1.5
"#;
        let value = parse(text, Path::new("app.toml")).unwrap().unwrap();
        let map = value.as_mapping().unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["app", "ports", "database"]);
        assert_eq!(
            map.get("ports"),
            Some(&ConfigValue::from(vec![8080, 8081]))
        );
        let database = map.get("database").and_then(ConfigValue::as_mapping).unwrap();
        assert_eq!(database.get("pool"), Some(&ConfigValue::Float(1.5)));
    }

    #[test]
    fn test_datetime_becomes_string() {
        let value = parse("released = 1979-05-27T07:32:00Z", Path::new("a.toml"))
            .unwrap()
            .unwrap();
        assert_eq!(
            value.child("released"),
            Some(&ConfigValue::from("1979-05-27T07:32:00Z"))
        );
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        let value = parse("", Path::new("a.toml")).unwrap().unwrap();
        assert_eq!(value, ConfigValue::Mapping(Mapping::new()));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse("key = ", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Parse { format: "toml", .. }));
    }
}

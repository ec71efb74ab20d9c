//! End-to-end tests against the public API.
//!
//! Responsibilities:
//! - Load a realistic configuration tree from disk and read it back.
//! - Exercise typed accessors, `get_as` and serialization of the namespace.
//! - Exercise the builder with a custom format handler.

use std::fs;
use std::path::Path;

use lite_config::{ConfigValue, LoaderOptions, Mapping, Store, StoreError};
use serde::Deserialize;
use serde_json::json;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn config_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "app.json",
        r#"{"name": "Example", "debug": false, "listen": {"host": "0.0.0.0", "port": 8080}}"#,
    );
    write(
        dir.path(),
        "database.ini",
        "; primary database\n[primary]\nhost = \"db.internal\"\nport = 5432\npool = 10\n",
    );
    write(
        dir.path(),
        "cache.toml",
        "backend = \"redis\"\nttl = 300\n\n[servers]\nhosts = [\"a\", \"b\"]\n",
    );
    write(dir.path(), "logging.yaml", "level: info\ntargets:\n  - stdout\n  - file\n");
    write(dir.path(), ".hidden.json", r#"{"secret": true}"#);
    write(dir.path(), "NOTES.txt", "not configuration");
    dir
}

#[derive(Debug, Deserialize, PartialEq)]
struct Listen {
    host: String,
    port: u16,
}

#[test]
fn test_load_directory_tree() {
    let dir = config_dir();

    let mut store = Store::new();
    store.load_dir(dir.path(), true, None).unwrap();

    assert_eq!(store.get_str("app.name"), Some("Example"));
    assert_eq!(store.get_bool("app.debug"), Some(false));
    assert_eq!(store.get_i64("app.listen.port"), Some(8080));
    assert_eq!(store.get_str("database.primary.host"), Some("db.internal"));
    assert_eq!(store.get_i64("database.primary.pool"), Some(10));
    assert_eq!(store.get_str("cache.servers.hosts.1"), Some("b"));
    assert_eq!(store.get_str("logging.targets.0"), Some("stdout"));

    assert!(!store.exists(".hidden"));
    assert!(!store.exists("NOTES"));
}

#[test]
fn test_typed_deserialization_of_subtree() {
    let dir = config_dir();

    let mut store = Store::new();
    store.load_dir(dir.path(), true, Some("svc")).unwrap();

    let listen: Option<Listen> = store.get_as("svc.app.listen").unwrap();
    assert_eq!(
        listen,
        Some(Listen {
            host: "0.0.0.0".to_string(),
            port: 8080,
        })
    );

    let targets: Option<Vec<String>> = store.get_as("svc.logging.targets").unwrap();
    assert_eq!(targets, Some(vec!["stdout".to_string(), "file".to_string()]));

    let missing: Option<Listen> = store.get_as("svc.app.absent").unwrap();
    assert_eq!(missing, None);
}

#[test]
fn test_get_as_type_mismatch_is_conversion_error() {
    let mut store = Store::new();
    let data: Mapping = [("port", ConfigValue::from("eighty"))].into_iter().collect();
    store.load_mapping(data, None);

    let err = store.get_as::<u16>("port").unwrap_err();
    assert!(matches!(err, StoreError::Conversion { ref path, .. } if path == "port"));
}

#[test]
fn test_namespace_serializes_to_json() {
    let mut store = Store::new();
    store.load_mapping(
        match ConfigValue::from(json!({"db": {"port": 5432}})) {
            ConfigValue::Mapping(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        },
        None,
    );

    let rendered = serde_json::to_value(store.all()).unwrap();
    assert_eq!(
        rendered,
        json!({
            "db": {"port": 5432},
            "db.port": 5432,
        })
    );
}

#[test]
fn test_builder_with_custom_format() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "flags.list", "alpha\nbeta\n");

    let mut store = Store::builder()
        .with_ignore_unsupported_file_types(false)
        .with_format("list", |path: &Path| -> anyhow::Result<Option<Mapping>> {
            let text = fs::read_to_string(path)?;
            let items: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
            Ok(Some([("items", ConfigValue::from(items))].into_iter().collect()))
        })
        .build();
    store.load_dir(dir.path(), true, None).unwrap();

    assert_eq!(store.get_str("flags.items.1"), Some("beta"));
}

#[test]
fn test_strict_store_rejects_unknown_files() {
    let dir = config_dir();

    let mut store = Store::with_options(LoaderOptions {
        ignore_unsupported_file_types: false,
        ..LoaderOptions::default()
    });
    let err = store.load_dir(dir.path(), true, None).unwrap_err();

    assert!(matches!(err, StoreError::UnsupportedFormat { ref extension, .. } if extension == "txt"));
    assert!(err.to_string().contains("NOTES.txt"));
}

//! Format loaders: turn a source file into a `ConfigValue`.
//!
//! Responsibilities:
//! - Map file extensions to the built-in formats (JSON, INI, TOML, YAML).
//! - Hold runtime-registered custom handlers for other extensions.
//! - Read a source and report whether it parsed, was empty, or has no handler.
//!
//! Does NOT handle:
//! - Prefix resolution or root-shape validation (see `loader::pipeline`).
//! - The unsupported-format policy (see `loader::pipeline`).
//!
//! Invariants:
//! - Extensions are matched case-insensitively.
//! - Built-in formats take precedence over custom handlers.
//! - A custom handler returning `Ok(None)` declines the source.

mod ini;
mod json;
mod toml;
mod yaml;

use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use crate::constants::{INI_EXTENSION, JSON_EXTENSION, TOML_EXTENSION, YAML_EXTENSIONS};
use crate::loader::{LoaderOptions, Result, StoreError};
use crate::types::{ConfigValue, Mapping};

/// Built-in source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ini,
    Toml,
    Yaml,
}

impl Format {
    /// Resolve a built-in format from a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            JSON_EXTENSION => Some(Format::Json),
            INI_EXTENSION => Some(Format::Ini),
            TOML_EXTENSION => Some(Format::Toml),
            ext if YAML_EXTENSIONS.contains(&ext) => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => json::NAME,
            Format::Ini => ini::NAME,
            Format::Toml => toml::NAME,
            Format::Yaml => yaml::NAME,
        }
    }

    /// Parse source text. `Ok(None)` means the source carries no content.
    pub fn parse_str(
        self,
        text: &str,
        path: &Path,
        options: &LoaderOptions,
    ) -> Result<Option<ConfigValue>> {
        match self {
            Format::Json => json::parse(text, path),
            Format::Ini => ini::parse(text, path, options),
            Format::Toml => toml::parse(text, path),
            Format::Yaml => yaml::parse(text, path),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parser for a file extension the built-in formats do not cover.
///
/// Returning `Ok(None)` declines the file, which then falls through to the
/// unsupported-format policy. Return an empty mapping to accept a file that
/// carries no content.
pub trait FormatHandler: Send + Sync {
    fn parse(&self, path: &Path) -> anyhow::Result<Option<Mapping>>;
}

impl<F> FormatHandler for F
where
    F: Fn(&Path) -> anyhow::Result<Option<Mapping>> + Send + Sync,
{
    fn parse(&self, path: &Path) -> anyhow::Result<Option<Mapping>> {
        self(path)
    }
}

/// Extension → custom handler table.
#[derive(Default)]
pub struct FormatRegistry {
    handlers: HashMap<String, Box<dyn FormatHandler>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for `extension`.
    ///
    /// A leading dot is ignored, so `".env"` and `"env"` are the same key.
    pub fn register(&mut self, extension: &str, handler: impl FormatHandler + 'static) {
        let key = normalize_extension(extension);
        tracing::debug!(extension = %key, "Registered custom format handler");
        self.handlers.insert(key, Box::new(handler));
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.handlers.contains_key(&normalize_extension(extension))
    }

    fn get(&self, extension: &str) -> Option<&dyn FormatHandler> {
        self.handlers.get(extension).map(|handler| handler.as_ref())
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut extensions: Vec<_> = self.handlers.keys().collect();
        extensions.sort();
        f.debug_struct("FormatRegistry")
            .field("extensions", &extensions)
            .finish()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

/// What reading a single source produced.
#[derive(Debug)]
pub(crate) enum SourceContent {
    /// Parsed root value, with the name of the format that produced it.
    Parsed { value: ConfigValue, format: String },
    /// The source is empty or ignorable.
    Empty,
    /// No built-in format or custom handler accepted the extension.
    Unsupported { extension: String },
}

/// Read and parse one source file according to its extension.
pub(crate) fn read_source(
    path: &Path,
    registry: &FormatRegistry,
    options: &LoaderOptions,
) -> Result<SourceContent> {
    let extension = path
        .extension()
        .map(|ext| normalize_extension(&ext.to_string_lossy()))
        .unwrap_or_default();

    if let Some(format) = Format::from_extension(&extension) {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => StoreError::parse(path, format.name(), e.to_string()),
            _ => StoreError::io(path, e),
        })?;
        return Ok(match format.parse_str(&text, path, options)? {
            Some(value) => SourceContent::Parsed {
                value,
                format: format.name().to_string(),
            },
            None => SourceContent::Empty,
        });
    }

    let Some(handler) = registry.get(&extension) else {
        return Ok(SourceContent::Unsupported { extension });
    };

    match handler.parse(path) {
        Ok(Some(mapping)) => Ok(SourceContent::Parsed {
            value: ConfigValue::Mapping(mapping),
            format: extension,
        }),
        Ok(None) => {
            tracing::debug!(
                path = %path.display(),
                extension = %extension,
                "Custom format handler declined source"
            );
            Ok(SourceContent::Unsupported { extension })
        }
        Err(source) => Err(StoreError::Handler {
            path: path.to_path_buf(),
            extension,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(Format::from_extension("JSON"), Some(Format::Json));
        assert_eq!(Format::from_extension("yml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("Yaml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("ini"), Some(Format::Ini));
        assert_eq!(Format::from_extension("toml"), Some(Format::Toml));
        assert_eq!(Format::from_extension("php"), None);
    }

    #[test]
    fn test_read_source_builtin() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "app.json", r#"{"name": "demo"}"#);

        let content = read_source(&path, &FormatRegistry::new(), &LoaderOptions::default()).unwrap();
        match content {
            SourceContent::Parsed { value, format } => {
                assert_eq!(format, "json");
                assert_eq!(value.child("name"), Some(&ConfigValue::from("demo")));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_read_source_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "app.conf", "name = demo");

        let content = read_source(&path, &FormatRegistry::new(), &LoaderOptions::default()).unwrap();
        assert!(matches!(content, SourceContent::Unsupported { extension } if extension == "conf"));
    }

    #[test]
    fn test_read_source_custom_handler_and_decline() {
        let dir = TempDir::new().unwrap();
        let accepted = write(&dir, "app.env", "NAME=demo\n");
        let declined = write(&dir, "skip.env", "");

        let mut registry = FormatRegistry::new();
        registry.register(".ENV", |path: &Path| -> anyhow::Result<Option<Mapping>> {
            let text = fs::read_to_string(path)?;
            if text.is_empty() {
                return Ok(None);
            }
            Ok(Some(
                text.lines()
                    .filter_map(|line| line.split_once('='))
                    .map(|(k, v)| (k, ConfigValue::from(v)))
                    .collect(),
            ))
        });
        assert!(registry.contains("env"));

        let options = LoaderOptions::default();
        match read_source(&accepted, &registry, &options).unwrap() {
            SourceContent::Parsed { value, format } => {
                assert_eq!(format, "env");
                assert_eq!(value.child("NAME"), Some(&ConfigValue::from("demo")));
            }
            other => panic!("unexpected content: {other:?}"),
        }
        assert!(matches!(
            read_source(&declined, &registry, &options).unwrap(),
            SourceContent::Unsupported { .. }
        ));
    }

    #[test]
    fn test_read_source_handler_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "app.bad", "");

        let mut registry = FormatRegistry::new();
        registry.register("bad", |_: &Path| -> anyhow::Result<Option<Mapping>> {
            anyhow::bail!("cannot parse")
        });

        let err = read_source(&path, &registry, &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, StoreError::Handler { extension, .. } if extension == "bad"));
    }

    #[test]
    fn test_read_source_invalid_utf8_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.ini");
        fs::write(&path, b"name = caf\xe9\n").unwrap();

        let err = read_source(&path, &FormatRegistry::new(), &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { format: "ini", .. }));
    }

    #[test]
    fn test_read_source_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_source(&path, &FormatRegistry::new(), &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}

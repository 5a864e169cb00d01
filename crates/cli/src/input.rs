//! Input file parsing for add and update commands.
//!
//! Responsibilities:
//! - Read JSON (or YAML for `.yaml`/`.yml`) files of model objects.
//! - Accept either a list of items or one bare item.
//! - Parse the JSON object given to `command write`.
//!
//! Does NOT handle:
//! - Field validation (done by the client before any request is sent).
//!
//! Invariants:
//! - The list shape is tried first; a single object is the fallback.
//! - When neither shape parses, the error names both attempts.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading user-supplied input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} is neither a list of {kind} items nor a single {kind}:\n  as a list: {as_list}\n  as a single item: {as_item}",
        path.display()
    )]
    Shape {
        path: PathBuf,
        kind: &'static str,
        as_list: String,
        as_item: String,
    },

    #[error("{} contains no {kind} items", path.display())]
    Empty { path: PathBuf, kind: &'static str },

    #[error("{0}")]
    Invalid(String),
}

/// Serialization format of an input file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read every `T` from `path`.
pub fn read_items<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<Vec<T>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_items(&text, InputFormat::from_path(path), path, kind)
}

/// Parse `text` as a list of `T`, falling back to a single `T`.
pub fn parse_items<T: DeserializeOwned>(
    text: &str,
    format: InputFormat,
    path: &Path,
    kind: &'static str,
) -> Result<Vec<T>, InputError> {
    let items = match decode::<Vec<T>>(text, format) {
        Ok(items) => items,
        Err(as_list) => match decode::<T>(text, format) {
            Ok(item) => vec![item],
            Err(as_item) => {
                return Err(InputError::Shape {
                    path: path.to_path_buf(),
                    kind,
                    as_list,
                    as_item,
                });
            }
        },
    };

    if items.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
            kind,
        });
    }
    Ok(items)
}

fn decode<T: DeserializeOwned>(text: &str, format: InputFormat) -> Result<T, String> {
    match format {
        InputFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    }
}

/// Parse the `{"resource": value}` object of a set command.
pub fn parse_command_body(text: &str) -> Result<Map<String, Value>, InputError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        Ok(Value::Object(_)) => Err(InputError::Invalid(
            "command body must set at least one resource".to_string(),
        )),
        Ok(other) => Err(InputError::Invalid(format!(
            "command body must be a JSON object of resource names to values, got {}",
            other
        ))),
        Err(e) => Err(InputError::Invalid(format!("command body is not valid JSON: {}", e))),
    }
}

//! Merge devbox-style JSON configuration fragments into one document.
//!
//! Fragments may carry whole-line `//` comments. Arrays under the same key are
//! concatenated and then sorted and deduplicated; any other repeated key must
//! carry the same value in every fragment.

use crate::error::ToolError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Blank out lines whose first non-whitespace characters are `//`.
///
/// Line structure is preserved so JSON error positions still match the file.
pub fn strip_line_comments(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with("//") {
                ""
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse one fragment; the top level must be an object.
pub fn parse_fragment(path: &Path, text: &str) -> Result<Map<String, Value>, ToolError> {
    let value: Value =
        serde_json::from_str(&strip_line_comments(text)).map_err(|e| ToolError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ToolError::InvalidJson {
            path: path.to_path_buf(),
            message: format!("expected a top-level object, found {}", kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Merge fragments in order.
pub fn merge_fragments<I>(fragments: I) -> Result<Map<String, Value>, ToolError>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    let mut merged = Map::new();
    for fragment in fragments {
        for (key, value) in fragment {
            match merged.get_mut(&key) {
                None => {
                    merged.insert(key, value);
                }
                Some(Value::Array(existing)) => match value {
                    Value::Array(items) => existing.extend(items),
                    other => {
                        return Err(conflict(key, &Value::Array(existing.clone()), &other));
                    }
                },
                Some(existing) => {
                    if *existing != value {
                        return Err(conflict(key, existing, &value));
                    }
                }
            }
        }
    }

    for value in merged.values_mut() {
        if let Value::Array(items) = value {
            sort_unique(items);
        }
    }
    Ok(merged)
}

fn conflict(key: String, existing: &Value, incoming: &Value) -> ToolError {
    ToolError::MergeConflict {
        key,
        existing: existing.to_string(),
        incoming: incoming.to_string(),
    }
}

/// Strings order by value, anything else by its compact JSON text.
fn sort_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn sort_unique(items: &mut Vec<Value>) {
    items.sort_by_cached_key(sort_key);
    items.dedup();
}

/// Read, merge and pretty-print the given files.
pub fn concat_files(paths: &[PathBuf]) -> Result<String, ToolError> {
    let mut fragments = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(path).map_err(|source| ToolError::ReadFile {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "Parsing fragment");
        fragments.push(parse_fragment(path, &text)?);
    }
    let merged = merge_fragments(fragments)?;
    serde_json::to_string_pretty(&Value::Object(merged)).map_err(|e| ToolError::InvalidJson {
        path: PathBuf::from("<merged>"),
        message: e.to_string(),
    })
}

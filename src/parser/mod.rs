use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::path::Path;

use crate::model::Bindings;

/// Parse initial variable bindings.
///
/// The document must be a single JSON object; each key becomes a variable
/// and its value is used as-is:
///
/// ```json
/// { "name": "north", "hp": 10, "flags": [1, 2] }
/// ```
pub fn load_bindings(json: &str) -> Result<Bindings> {
    let root: Value = serde_json::from_str(json)?;

    match root {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(anyhow!(
            "bindings must be a JSON object, found {}",
            type_name(&other)
        )),
    }
}

pub fn load_bindings_file(path: &Path) -> Result<Bindings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    load_bindings(&json).with_context(|| format!("Parsing bindings {}", path.display()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

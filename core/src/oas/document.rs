#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Parses YAML or JSON text into the in-memory document every other stage
//! borrows. Key order is kept as declared.

use crate::error::{AppError, AppResult};
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

/// Parses an OpenAPI document from YAML (or JSON) text.
///
/// YAML merge keys (`<<: *anchor`) are expanded. Mapping keys that are not
/// strings (e.g. an unquoted `200:` status) are converted to their string form.
///
/// # Errors
///
/// * [`AppError::Yaml`] when the text is not well-formed.
/// * [`AppError::InvalidDocument`] when the top level is not a mapping.
pub fn load_document(text: &str) -> AppResult<Value> {
    let mut raw: YamlValue = serde_yaml::from_str(text)?;
    raw.apply_merge()?;
    let document = yaml_to_json(raw);

    if !document.is_object() {
        return Err(AppError::InvalidDocument(
            "top level must be a mapping".to_string(),
        ));
    }

    match document.get("openapi").and_then(Value::as_str) {
        Some(version) if version.starts_with("3.") => {
            tracing::debug!(version, "loaded OpenAPI document");
        }
        Some(version) => {
            tracing::warn!(version, "unsupported OpenAPI version, continuing anyway");
        }
        None => tracing::warn!("document has no `openapi` version field"),
    }

    Ok(document)
}

/// Every `servers[*].url` string, in declaration order.
pub fn server_urls(document: &Value) -> Vec<String> {
    document
        .get("servers")
        .and_then(Value::as_array)
        .map(|servers| {
            servers
                .iter()
                .filter_map(|server| server.get("url").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(flag) => Value::Bool(flag),
        YamlValue::Number(number) => number_to_json(&number),
        YamlValue::String(text) => Value::String(text),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(key, value)| (key_to_string(key), yaml_to_json(value)))
                .collect::<Map<String, Value>>(),
        ),
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn number_to_json(number: &serde_yaml::Number) -> Value {
    if let Some(int) = number.as_i64() {
        Value::from(int)
    } else if let Some(uint) = number.as_u64() {
        Value::from(uint)
    } else {
        // NaN and infinities have no JSON form.
        number
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| Value::String(number.to_string()), Value::Number)
    }
}

fn key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(text) => text,
        YamlValue::Number(number) => number.to_string(),
        YamlValue::Bool(flag) => flag.to_string(),
        YamlValue::Null => "null".to_string(),
        other => yaml_to_json(other).to_string(),
    }
}

#![deny(missing_docs)]

//! # Parameter Resolution
//!
//! Merges path-level and operation-level parameters into [`OperationParam`]s.
//!
//! Parameters are identified by `(name, in)`. The first occurrence fixes the
//! position, later occurrences (operation level) override the definition.

use crate::oas::models::{OperationParam, ParamLocation};
use crate::oas::resolver::example::{generate_body, schema_type};
use crate::oas::resolver::media::{declared_example, sample_content};
use crate::oas::resolver::refs::RefResolver;
use indexmap::IndexMap;
use serde_json::Value;

/// Resolves the parameters of one operation.
///
/// # Arguments
///
/// * `path_item` - The path item holding shared `parameters`.
/// * `operation` - The operation object; its `parameters` override shared ones.
/// * `resolver` - Used for `$ref` parameters, schemas and examples.
pub fn resolve_parameters<R>(path_item: &Value, operation: &Value, resolver: &R) -> Vec<OperationParam>
where
    R: RefResolver + ?Sized,
{
    let mut merged: IndexMap<(String, ParamLocation), OperationParam> = IndexMap::new();

    let lists = [path_item.get("parameters"), operation.get("parameters")];
    for list in lists.into_iter().flatten().filter_map(Value::as_array) {
        for entry in list {
            match parse_parameter(resolver.resolve_ref(entry), resolver) {
                Some(param) => {
                    merged.insert((param.name.clone(), param.location), param);
                }
                None => tracing::debug!(parameter = %entry, "skipping parameter without usable name/in"),
            }
        }
    }

    merged.into_values().collect()
}

fn parse_parameter<R>(param: &Value, resolver: &R) -> Option<OperationParam>
where
    R: RefResolver + ?Sized,
{
    let name = param.get("name")?.as_str()?;
    let location = ParamLocation::parse(param.get("in")?.as_str()?)?;
    let required = location == ParamLocation::Path
        || param.get("required").and_then(Value::as_bool).unwrap_or(false);

    let schema_type = param
        .get("schema")
        .and_then(|schema| resolver.resolve_ref(schema).as_object())
        .and_then(|schema| schema_type(schema))
        .unwrap_or("string")
        .to_string();

    Some(OperationParam {
        name: name.to_string(),
        location,
        required,
        schema_type,
        example: parameter_example(param, resolver),
    })
}

/// `example`, `examples`, then the schema, then the first `content` entry.
fn parameter_example<R>(param: &Value, resolver: &R) -> Option<Value>
where
    R: RefResolver + ?Sized,
{
    if let Some(example) = declared_example(param, resolver) {
        return Some(example.clone());
    }

    if let Some(schema) = param.get("schema") {
        let generated = generate_body(schema, resolver);
        if !generated.is_null() {
            return Some(generated);
        }
    }

    sample_content(param.get("content"), resolver)
        .map(|sample| sample.body)
        .filter(|body| !body.is_null())
}

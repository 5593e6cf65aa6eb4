#![deny(missing_docs)]

//! # Example Generation
//!
//! Turns a schema node into a representative "happy path" value.
//!
//! Precedence, re-checked every time the effective schema changes:
//! 1. absent / empty / non-mapping schema → `null`
//! 2. `$ref` → resolved target
//! 3. `allOf` (first object-typed member) | `oneOf` (first) | `anyOf` (first)
//! 4. `example` → `default` → first `enum` entry, verbatim
//! 5. structure: object → mapping, array → one-element sequence,
//!    scalar → `<type>` placeholder, anything else → `<value>`
//!
//! `allOf` adopts a single member and never merges members. When no member
//! is object-typed the schema falls through with `allOf` still attached.

use crate::oas::resolver::refs::{RefResolver, RefTrail};
use serde_json::{Map, Value};

/// Key used for the sample entry generated from `additionalProperties`.
pub const ADDITIONAL_PROPERTY_KEY: &str = "<additionalPropertyKey>";

/// Placeholder for schemas whose type is missing or unknown.
pub const FALLBACK_PLACEHOLDER: &str = "<value>";

const SCALAR_TYPES: [&str; 4] = ["string", "integer", "number", "boolean"];

/// Generates an example value for `schema`.
///
/// `Value::Null` both as input (absent schema) and as output (nothing to generate).
pub fn generate_body<R>(schema: &Value, resolver: &R) -> Value
where
    R: RefResolver + ?Sized,
{
    generate(schema, resolver, &RefTrail::new())
}

/// Returns the effective `type` of a schema.
///
/// OpenAPI 3.1 type lists (`[string, "null"]`) use their first non-`null` entry.
pub fn schema_type(schema: &Map<String, Value>) -> Option<&str> {
    match schema.get("type")? {
        Value::String(ty) => Some(ty.as_str()),
        Value::Array(types) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null"),
        _ => None,
    }
}

/// `path` holds the references expanded by the ancestors of this node; following
/// one of them again would recurse forever, so it counts as a cycle.
fn generate<'a, R>(schema: &'a Value, resolver: &'a R, path: &RefTrail) -> Value
where
    R: RefResolver + ?Sized,
{
    let mut trail = path.clone();
    let Some(node) = effective_schema(schema, resolver, &mut trail) else {
        return Value::Null;
    };

    if let Some(literal) = literal_override(node) {
        return literal.clone();
    }

    match schema_type(node) {
        Some("object") => generate_object(node, resolver, &trail),
        None if !node.contains_key("type") && node.contains_key("properties") => {
            generate_object(node, resolver, &trail)
        }
        Some("array") => {
            let item = match node.get("items") {
                Some(items) => generate(items, resolver, &trail),
                None => Value::Null,
            };
            Value::Array(vec![item])
        }
        Some(scalar) if SCALAR_TYPES.contains(&scalar) => Value::String(format!("<{scalar}>")),
        _ => Value::String(FALLBACK_PLACEHOLDER.to_string()),
    }
}

/// Applies reference and combinator rewrites until the schema is stable.
///
/// Terminates because every rewrite either follows a new pointer (growing `trail`)
/// or descends into a strictly smaller inline node.
fn effective_schema<'a, R>(
    mut schema: &'a Value,
    resolver: &'a R,
    trail: &mut RefTrail,
) -> Option<&'a Map<String, Value>>
where
    R: RefResolver + ?Sized,
{
    loop {
        let node = schema.as_object().filter(|node| !node.is_empty())?;

        if node.contains_key("$ref") {
            let resolved = resolver.resolve_ref_with(schema, trail);
            if !same_node(resolved, schema) {
                schema = resolved;
                continue;
            }
        }

        match select_combinator(node, resolver, trail) {
            Some(selected) if !same_node(selected, schema) => schema = selected,
            _ => return Some(node),
        }
    }
}

/// Picks the sub-schema a combinator stands for, if any.
fn select_combinator<'a, R>(
    node: &'a Map<String, Value>,
    resolver: &'a R,
    trail: &mut RefTrail,
) -> Option<&'a Value>
where
    R: RefResolver + ?Sized,
{
    if let Some(members) = node.get("allOf") {
        for member in members.as_array()? {
            // Members that are not adopted must not leave their pointers behind.
            let mut scratch = trail.clone();
            let resolved = resolver.resolve_ref_with(member, &mut scratch);
            let is_object = resolved
                .as_object()
                .is_some_and(|candidate| schema_type(candidate) == Some("object"));
            if is_object {
                *trail = scratch;
                return Some(resolved);
            }
        }
        return None;
    }

    let alternatives = node.get("oneOf").or_else(|| node.get("anyOf"))?;
    let first = alternatives.as_array()?.first()?;
    Some(resolver.resolve_ref_with(first, trail))
}

fn literal_override(node: &Map<String, Value>) -> Option<&Value> {
    node.get("example")
        .or_else(|| node.get("default"))
        .or_else(|| node.get("enum").and_then(Value::as_array)?.first())
}

fn generate_object<R>(node: &Map<String, Value>, resolver: &R, trail: &RefTrail) -> Value
where
    R: RefResolver + ?Sized,
{
    let mut body = Map::new();

    if let Some(properties) = node.get("properties").and_then(Value::as_object) {
        for (name, property) in properties {
            body.insert(name.clone(), generate(property, resolver, trail));
        }
    }

    if let Some(additional) = node.get("additionalProperties") {
        // `true`/`false` carry no shape: same as an empty schema.
        let sample = if additional.is_object() {
            generate(additional, resolver, trail)
        } else {
            Value::Null
        };
        body.insert(ADDITIONAL_PROPERTY_KEY.to_string(), sample);
    }

    Value::Object(body)
}

fn same_node(a: &Value, b: &Value) -> bool {
    std::ptr::eq(a, b) || a == b
}

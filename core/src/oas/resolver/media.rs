#![deny(missing_docs)]

//! # Media Selection
//!
//! Picks one entry of a `content` map and produces its example payload.
//! Shared by request bodies and responses.

use crate::oas::resolver::example::generate_body;
use crate::oas::resolver::refs::RefResolver;
use serde_json::{Map, Value};

/// An example payload for one media type.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSample {
    /// Selected media type.
    pub media_type: String,
    /// Resolved schema (`null` when absent).
    pub schema: Value,
    /// Declared example, or the body generated from `schema`.
    pub body: Value,
}

/// Selects the most appropriate content entry for JSON-like payloads.
///
/// Preference order:
/// 1. `application/json`
/// 2. Any `+json` media type (e.g. `application/vnd.api+json`)
/// 3. `application/*`
/// 4. `*/*`
/// 5. First available entry
pub fn select_media(content: &Map<String, Value>) -> Option<(&str, &Value)> {
    let preferred = content
        .get_key_value("application/json")
        .or_else(|| content.iter().find(|(k, _)| k.ends_with("+json")))
        .or_else(|| content.get_key_value("application/*"))
        .or_else(|| content.get_key_value("*/*"))
        .or_else(|| content.iter().next());

    preferred.map(|(k, media)| (k.as_str(), media))
}

/// Builds the example payload of a `content` map.
///
/// A literal `example` on the media object wins, then the first `examples`
/// entry carrying a `value`; otherwise the body is generated from the schema.
/// Returns `None` when `content` is missing, not a mapping or empty.
pub fn sample_content<R>(content: Option<&Value>, resolver: &R) -> Option<MediaSample>
where
    R: RefResolver + ?Sized,
{
    let content = content?.as_object()?;
    let (media_type, media) = select_media(content)?;

    let absent = Value::Null;
    let schema_node = media.get("schema").unwrap_or(&absent);
    let schema = resolver.resolve_ref(schema_node).clone();

    let body = match declared_example(media, resolver) {
        Some(example) => example.clone(),
        None => generate_body(schema_node, resolver),
    };

    Some(MediaSample {
        media_type: media_type.to_string(),
        schema,
        body,
    })
}

/// Reads `example`, else the first `examples[*].value` (each entry `$ref`-resolved).
///
/// Used for media objects and parameters, which share both keys.
pub fn declared_example<'a, R>(node: &'a Value, resolver: &'a R) -> Option<&'a Value>
where
    R: RefResolver + ?Sized,
{
    if let Some(example) = node.get("example") {
        return Some(example);
    }

    node.get("examples")?
        .as_object()?
        .values()
        .find_map(|entry| resolver.resolve_ref(entry).get("value"))
}

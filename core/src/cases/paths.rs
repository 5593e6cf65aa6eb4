#![deny(missing_docs)]

//! # Path Rendering
//!
//! Turns templated paths into readable URLs with named placeholders, and
//! encodes query strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::OnceLock;

/// Characters left as-is in query keys and values.
/// `<` and `>` stay readable so placeholders survive encoding.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'<')
    .remove(b'>');

fn template_regex() -> &'static Regex {
    static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();
    TEMPLATE_RE.get_or_init(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"))
}

/// Placeholder for a path parameter.
///
/// * `petId`, `pet_id` → `<id_pet>`
/// * `id`, `ID_` → `<id>`
/// * anything else → `<name>`
pub fn path_placeholder(name: &str) -> String {
    let lowered = name.to_lowercase();
    let trimmed = lowered.trim_end_matches('_');
    match trimmed.strip_suffix("id") {
        Some(base) => {
            let base = base.trim_end_matches('_');
            if base.is_empty() {
                "<id>".to_string()
            } else {
                format!("<id_{base}>")
            }
        }
        None => format!("<{name}>"),
    }
}

/// Replaces every `{name}` segment of `path` with its placeholder.
pub fn substitute_path(path: &str) -> String {
    template_regex()
        .replace_all(path, |caps: &Captures| path_placeholder(&caps[1]))
        .into_owned()
}

/// The collection a templated item path belongs to.
///
/// `/pets/{petId}` → `/pets`. Paths whose last segment is not templated, or
/// that have a single segment, have no collection.
pub fn collection_path(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    let (parent, last) = trimmed.rsplit_once('/')?;
    if parent.is_empty() || !last.contains('{') {
        return None;
    }
    Some(parent)
}

/// Builds `?k=v&...` from `(key, value)` pairs; empty input gives an empty string.
pub fn query_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let encoded: Vec<String> = pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE_SET),
                utf8_percent_encode(&value, QUERY_ENCODE_SET)
            )
        })
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// Renders an example as a header, cookie or query value.
///
/// Strings are used unquoted, everything else as compact JSON.
pub fn render_param_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

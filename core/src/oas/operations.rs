#![deny(missing_docs)]

//! # Operation Extraction
//!
//! Walks `paths` in declaration order and collects one [`ParsedOperation`]
//! per HTTP method.

use crate::oas::models::ParsedOperation;
use crate::oas::resolver::{extract_request_body, extract_response, resolve_parameters, RefResolver};
use serde_json::Value;

/// Method keys recognised inside a path item.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "patch", "head", "options", "trace",
];

/// Returns `true` if a path item key names an HTTP operation (case-insensitive).
pub fn is_http_method(key: &str) -> bool {
    HTTP_METHODS
        .iter()
        .any(|method| method.eq_ignore_ascii_case(key))
}

/// Extracts every operation of the document.
///
/// Malformed path items and operations are skipped; extraction never fails.
pub fn extract_operations<R>(document: &Value, resolver: &R) -> Vec<ParsedOperation>
where
    R: RefResolver + ?Sized,
{
    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        tracing::warn!("document has no `paths` mapping");
        return Vec::new();
    };

    let mut operations = Vec::new();
    for (path, path_item) in paths {
        let path_item = resolver.resolve_ref(path_item);
        let Some(item) = path_item.as_object() else {
            tracing::debug!(path = %path, "skipping non-mapping path item");
            continue;
        };

        for (key, operation) in item {
            if !is_http_method(key) {
                continue;
            }
            if !operation.is_object() {
                tracing::debug!(path = %path, method = %key, "skipping non-mapping operation");
                continue;
            }

            operations.push(ParsedOperation {
                path: path.clone(),
                method: key.to_ascii_uppercase(),
                operation_id: text_field(operation, "operationId"),
                summary: text_field(operation, "summary"),
                description: text_field(operation, "description"),
                parameters: resolve_parameters(path_item, operation, resolver),
                request_body: extract_request_body(operation, resolver),
                response: extract_response(operation, resolver),
            });
        }
    }

    tracing::debug!(count = operations.len(), "extracted operations");
    operations
}

fn text_field(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

#![deny(missing_docs)]

//! # Response Resolution
//!
//! Picks the success response of an operation and builds its example body.

use crate::oas::models::ResponseExample;
use crate::oas::resolver::media::sample_content;
use crate::oas::resolver::refs::RefResolver;
use serde_json::{Map, Value};

const SUCCESS_CODES: [&str; 7] = ["200", "201", "202", "203", "204", "205", "206"];

/// Selects the status key treated as the expected outcome.
///
/// Priority:
/// 1. Concrete success codes `200`..`206`, in that order
/// 2. Any other `2xx` key (`207`, `2XX`, ...)
/// 3. The first declared key
pub fn select_success_status(responses: &Map<String, Value>) -> Option<&str> {
    if let Some(code) = SUCCESS_CODES
        .iter()
        .find(|code| responses.contains_key(**code))
    {
        return Some(*code);
    }

    responses
        .keys()
        .find(|key| key.len() == 3 && key.starts_with('2'))
        .or_else(|| responses.keys().next())
        .map(String::as_str)
}

/// Extracts the success response of an operation.
///
/// Returns `None` when the operation has no (or an empty) `responses` map.
pub fn extract_response<R>(operation: &Value, resolver: &R) -> Option<ResponseExample>
where
    R: RefResolver + ?Sized,
{
    let responses = operation.get("responses")?.as_object()?;
    let status = select_success_status(responses)?;
    let response = resolver.resolve_ref(&responses[status]);

    let example = match sample_content(response.get("content"), resolver) {
        Some(sample) => ResponseExample {
            status: status.to_string(),
            media_type: Some(sample.media_type),
            schema: sample.schema,
            body: sample.body,
        },
        None => ResponseExample {
            status: status.to_string(),
            media_type: None,
            schema: Value::Null,
            body: Value::Null,
        },
    };
    Some(example)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::resolver::refs::DocumentResolver;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn status_of(responses: Value) -> Option<String> {
        select_success_status(responses.as_object().unwrap()).map(str::to_string)
    }

    #[test]
    fn test_select_success_status_priority() {
        assert_eq!(
            status_of(json!({"404": {}, "201": {}, "200": {}})),
            Some("200".into())
        );
        assert_eq!(status_of(json!({"400": {}, "204": {}})), Some("204".into()));
        assert_eq!(status_of(json!({"default": {}, "2XX": {}})), Some("2XX".into()));
        assert_eq!(
            status_of(json!({"default": {}, "404": {}})),
            Some("default".into())
        );
        assert_eq!(status_of(json!({})), None);
    }

    #[test]
    fn test_extract_response_with_ref() {
        let doc = json!({"components": {
            "responses": {"PetList": {
                "description": "ok",
                "content": {"application/json": {"schema": {
                    "type": "array", "items": {"$ref": "#/components/schemas/Pet"}
                }}}
            }},
            "schemas": {"Pet": {"type": "object", "properties": {"id": {"type": "integer"}}}}
        }});
        let resolver = DocumentResolver::new(&doc);
        let op = json!({"responses": {
            "200": {"$ref": "#/components/responses/PetList"},
            "500": {"description": "boom"}
        }});

        let response = extract_response(&op, &resolver).unwrap();
        assert_eq!(response.status, "200");
        assert_eq!(response.media_type.as_deref(), Some("application/json"));
        assert_eq!(response.body, json!([{"id": "<integer>"}]));
    }

    #[test]
    fn test_extract_response_without_content() {
        let doc = json!({});
        let resolver = DocumentResolver::new(&doc);
        let op = json!({"responses": {"204": {"description": "deleted"}}});

        let response = extract_response(&op, &resolver).unwrap();
        assert_eq!(response.status, "204");
        assert_eq!(response.media_type, None);
        assert_eq!(response.body, Value::Null);
    }

    #[test]
    fn test_extract_response_missing() {
        let doc = json!({});
        let resolver = DocumentResolver::new(&doc);
        assert!(extract_response(&json!({}), &resolver).is_none());
        assert!(extract_response(&json!({"responses": {}}), &resolver).is_none());
    }
}

#![deny(missing_docs)]

//! # Request Body Resolution
//!
//! Turns an operation's `requestBody` into an example payload.

use crate::oas::models::BodyExample;
use crate::oas::resolver::media::sample_content;
use crate::oas::resolver::refs::RefResolver;
use serde_json::Value;

/// Extracts the request body example of an operation.
///
/// `requestBody` may be a `$ref` to `#/components/requestBodies/...`.
/// Returns `None` when the operation declares no body or the body has no content.
pub fn extract_request_body<R>(operation: &Value, resolver: &R) -> Option<BodyExample>
where
    R: RefResolver + ?Sized,
{
    let request_body = resolver.resolve_ref(operation.get("requestBody")?);
    let sample = sample_content(request_body.get("content"), resolver)?;

    Some(BodyExample {
        media_type: sample.media_type,
        schema: sample.schema,
        body: sample.body,
    })
}

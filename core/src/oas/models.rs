#![deny(missing_docs)]

//! # Intermediate Representation
//!
//! Operation-level data extracted from an OpenAPI document, ready for
//! test-case assembly.

use derive_more::Display;
use serde::Serialize;
use serde_json::Value;

/// Where a parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Templated into the path (`/users/{id}`).
    #[display("path")]
    Path,
    /// Appended to the query string.
    #[display("query")]
    Query,
    /// Sent as a request header.
    #[display("header")]
    Header,
    /// Sent as a cookie.
    #[display("cookie")]
    Cookie,
}

impl ParamLocation {
    /// Parses the `in` field of a parameter object.
    ///
    /// Unknown locations (e.g. Swagger 2.0 `body`/`formData`) yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }
}

/// A parameter after `$ref` resolution and path/operation merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationParam {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    pub location: ParamLocation,
    /// Whether the parameter is required (path parameters always are).
    pub required: bool,
    /// `type` of the resolved schema, `"string"` when absent.
    pub schema_type: String,
    /// Example value, if one was declared or could be generated.
    pub example: Option<Value>,
}

/// The example payload chosen for a request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyExample {
    /// Selected media type (e.g. `application/json`).
    pub media_type: String,
    /// The resolved schema of the media type (`null` when none was declared).
    pub schema: Value,
    /// Declared or generated example body.
    pub body: Value,
}

/// The success response chosen for an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseExample {
    /// Status key as declared (`200`, `2XX`, `default`, ...).
    pub status: String,
    /// Selected media type, absent when the response has no content.
    pub media_type: Option<String>,
    /// The resolved schema of the media type.
    pub schema: Value,
    /// Declared or generated example body (`null` when there is no content).
    pub body: Value,
}

/// One `(path, method)` pair of the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedOperation {
    /// Templated path (`/users/{id}`).
    pub path: String,
    /// Upper-case HTTP method.
    pub method: String,
    /// `operationId`, if any.
    pub operation_id: Option<String>,
    /// `summary`, if any.
    pub summary: Option<String>,
    /// `description`, if any.
    pub description: Option<String>,
    /// Merged path-level and operation-level parameters.
    pub parameters: Vec<OperationParam>,
    /// Request body example.
    pub request_body: Option<BodyExample>,
    /// Success response example.
    pub response: Option<ResponseExample>,
}

impl ParsedOperation {
    /// Parameters sent in `location`, in declaration order.
    pub fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &OperationParam> {
        self.parameters
            .iter()
            .filter(move |param| param.location == location)
    }
}

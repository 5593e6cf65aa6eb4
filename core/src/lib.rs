#![deny(missing_docs)]

//! # casegen Core
//!
//! Core library deriving human-readable test cases from OpenAPI 3.x documents.
//!
//! The heart of the crate is the schema engine in [`oas::resolver`]:
//! internal `$ref` resolution with cycle detection, and example generation
//! that walks combinators, overrides and nested structures.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) loading, resolution and operation extraction.
pub mod oas;

/// Test-case assembly.
pub mod cases;

/// Text, YAML and JSON reports.
pub mod report;

pub use cases::{build_test_cases, CaseOptions, ExpectedResult, Step, TestCase};
pub use error::{AppError, AppResult};
pub use oas::{
    extract_operations, generate_body, load_document, resolve_pointer, server_urls,
    DocumentResolver, ParsedOperation, RefResolver,
};
pub use report::{render_json, render_text, render_yaml};

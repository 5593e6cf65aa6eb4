#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Loading YAML/JSON text into the in-memory document.
//! - **models**: Intermediate Representation of operations.
//! - **operations**: Walking `paths` into operations.
//! - **resolver**: `$ref` resolution, example generation, parameters, bodies and responses.

pub mod document;
pub mod models;
pub mod operations;
pub mod resolver;

mod ref_utils;

pub use document::{load_document, server_urls};
pub use models::{BodyExample, OperationParam, ParamLocation, ParsedOperation, ResponseExample};
pub use operations::extract_operations;
pub use resolver::{generate_body, resolve_pointer, DocumentResolver, RefResolver, RefTrail};

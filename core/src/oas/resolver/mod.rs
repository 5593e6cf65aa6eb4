#![deny(missing_docs)]

//! # Resolver Module
//!
//! Schema resolution and example generation over a parsed OpenAPI document.
//!
//! Handles:
//! - Internal `$ref` resolution with cycle detection (`refs`).
//! - Example/body generation from schema nodes (`example`).
//! - Media type selection for request and response content (`media`).
//! - Parameter merging, request bodies and success responses.

pub mod body;
pub mod example;
pub mod media;
pub mod params;
pub mod refs;
pub mod responses;

pub use body::extract_request_body;
pub use example::{generate_body, ADDITIONAL_PROPERTY_KEY, FALLBACK_PLACEHOLDER};
pub use media::select_media;
pub use params::resolve_parameters;
pub use refs::{resolve_pointer, DocumentResolver, RefResolver, RefTrail};
pub use responses::{extract_response, select_success_status};

#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Resolves internal `$ref` pointers against a single in-memory document.
//!
//! Resolution never fails:
//! - malformed or dangling pointers land on an empty mapping,
//! - external references (`http://...`, `other.yaml#/...`) are passed through untouched,
//! - a reference cycle returns the node that still carries `$ref` where the cycle was detected.
//!
//! Callers must treat a node that still has `$ref` after resolution as irreducible.

use crate::oas::ref_utils::{is_local_ref, local_pointer_segments};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Pointers already followed, threaded through every resolution call.
pub type RefTrail = HashSet<String>;

/// The capability the example generator needs: turning a `$ref` node into its target.
///
/// Implemented by [`DocumentResolver`] for real documents; tests can provide
/// lightweight doubles.
pub trait RefResolver {
    /// Resolves `node`, recording every followed pointer in `seen`.
    ///
    /// A pointer already present in `seen` must not be followed again.
    /// Nodes without `$ref` are returned unchanged.
    fn resolve_ref_with<'a>(&'a self, node: &'a Value, seen: &mut RefTrail) -> &'a Value;

    /// Resolves `node` starting from an empty trail.
    fn resolve_ref<'a>(&'a self, node: &'a Value) -> &'a Value {
        self.resolve_ref_with(node, &mut RefTrail::new())
    }
}

/// Resolver backed by one borrowed OpenAPI document.
#[derive(Debug, Clone, Copy)]
pub struct DocumentResolver<'d> {
    document: &'d Value,
}

impl<'d> DocumentResolver<'d> {
    /// Creates a resolver over `document`. The document is never copied or mutated.
    pub fn new(document: &'d Value) -> Self {
        Self { document }
    }
}

impl RefResolver for DocumentResolver<'_> {
    fn resolve_ref_with<'a>(&'a self, node: &'a Value, seen: &mut RefTrail) -> &'a Value {
        let Some(reference) = node.get("$ref") else {
            return node;
        };

        let pointer = match reference.as_str() {
            Some(pointer) if is_local_ref(pointer) => pointer,
            _ => {
                tracing::debug!(reference = %reference, "external $ref left unresolved");
                return node;
            }
        };

        if !seen.insert(pointer.to_string()) {
            tracing::debug!(pointer, "$ref cycle detected, keeping unresolved node");
            return node;
        }

        let target = resolve_pointer(self.document, pointer);
        // The target may itself be a reference.
        self.resolve_ref_with(target, seen)
    }
}

/// Looks up a local pointer (`#/a/b`) inside `document`.
///
/// Every step, including the last one, must land on a mapping. Anything else
/// (wrong prefix, missing key, scalar or sequence on the way) yields an empty mapping.
pub fn resolve_pointer<'a>(document: &'a Value, pointer: &str) -> &'a Value {
    let Some(segments) = local_pointer_segments(pointer) else {
        return empty_mapping();
    };

    let mut node = document;
    for segment in segments {
        match node.get(segment.as_str()) {
            Some(next @ Value::Object(_)) => node = next,
            _ => return empty_mapping(),
        }
    }
    node
}

fn empty_mapping() -> &'static Value {
    static EMPTY: OnceLock<Value> = OnceLock::new();
    EMPTY.get_or_init(|| Value::Object(Map::new()))
}

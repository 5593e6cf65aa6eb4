#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Shared helpers for splitting local `$ref` pointers (`#/a/b`) into their
//! decoded JSON Pointer segments.
//!
//! These utilities never fetch external documents: anything that does not
//! start with `#/` is not a local pointer.

/// Prefix every local (same-document) reference starts with.
pub(crate) const LOCAL_REF_PREFIX: &str = "#/";

/// Returns `true` if `ref_str` points into the current document.
pub(crate) fn is_local_ref(ref_str: &str) -> bool {
    ref_str.starts_with(LOCAL_REF_PREFIX)
}

/// Splits a local pointer into decoded segments.
///
/// Returns `None` if the reference is external (no `#/` prefix).
/// `"#/"` yields a single empty segment, which never names a real key.
pub(crate) fn local_pointer_segments(ref_str: &str) -> Option<impl Iterator<Item = String> + '_> {
    let pointer = ref_str.strip_prefix(LOCAL_REF_PREFIX)?;
    Some(pointer.split('/').map(decode_pointer_segment))
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
///
/// `~1` is decoded first so that `~01` stays `~1` instead of becoming `/`.
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_pointer_segments_split_and_decode() {
        let segments: Vec<String> = local_pointer_segments("#/root/x~0y/z~1w")
            .unwrap()
            .collect();
        assert_eq!(segments, vec!["root", "x~y", "z/w"]);
    }

    #[test]
    fn test_local_pointer_segments_rejects_external() {
        assert!(local_pointer_segments("http://example.com/openapi.yaml#/a").is_none());
        assert!(local_pointer_segments("#a").is_none());
        assert!(local_pointer_segments("abc").is_none());
    }

    #[test]
    fn test_root_pointer_has_single_empty_segment() {
        let segments: Vec<String> = local_pointer_segments("#/").unwrap().collect();
        assert_eq!(segments, vec![String::new()]);
    }

    #[test]
    fn test_decode_pointer_segment_order() {
        assert_eq!(decode_pointer_segment("a~01"), "a~1");
        assert_eq!(decode_pointer_segment("application~1json"), "application/json");
    }

    #[test]
    fn test_is_local_ref() {
        assert!(is_local_ref("#/components/schemas/User"));
        assert!(!is_local_ref("other.yaml#/components/schemas/User"));
    }
}

use tracing::trace;

use super::{ARRAY_MARKER, PathSet, SEPARATOR};

/// How a key contributes to the path of its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Plain key lookup, `.key`
    Field,
    /// Key holding an array, `.key[*]`; elements continue from the same segment
    Array,
}

impl SegmentKind {
    /// Generate the path segment string for `key`
    #[must_use]
    pub fn to_path_segment(self, key: &str) -> String {
        match self {
            Self::Field => format!("{SEPARATOR}{key}"),
            Self::Array => format!("{SEPARATOR}{key}{ARRAY_MARKER}"),
        }
    }
}

/// Append `key` to `parent`, record the result and hand it back so the caller
/// can recurse from it
pub(super) fn record(paths: &mut PathSet, parent: &str, key: &str, kind: SegmentKind) -> String {
    let child_path = format!("{parent}{}", kind.to_path_segment(key));
    trace!(path = %child_path, ?kind, "recording path");
    paths.insert(child_path.clone());
    child_path
}

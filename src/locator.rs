//! Sibling scanning for headings of one level.
//!
//! Starting from a search origin, walk the following siblings in document order, collecting every
//! element of the target marker kind until an element of the stop marker kind is reached. Elements
//! of any other kind, including markers deeper than the target, are stepped over.

use crate::document::DocumentTree;

/// Collect the siblings after `start` whose tag is `target`, stopping before the first `stop`.
///
/// With `include_start` the origin itself leads the result; the caller only sets it when the
/// origin is already known to carry the target marker. A `stop` of `None` scans to the end of the
/// siblings. Tags compare case-insensitively. The result is in document order and holds no node
/// twice.
pub fn locate<D: DocumentTree>(
    doc: &D,
    start: D::Node,
    stop: Option<&str>,
    target: &str,
    include_start: bool,
) -> Vec<D::Node> {
    let mut found = Vec::new();
    if include_start {
        found.push(start);
    }

    let mut cursor = doc.next_sibling(start);
    while let Some(node) = cursor {
        let tag = doc.tag(node);
        if stop.is_some_and(|s| tag.eq_ignore_ascii_case(s)) {
            break;
        }
        if tag.eq_ignore_ascii_case(target) {
            found.push(node);
        }
        cursor = doc.next_sibling(node);
    }

    found
}

#[cfg(test)]
#[path = "tests/locator.rs"]
mod tests;

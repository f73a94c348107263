use super::locate;
use crate::document::{Document, DocumentTree, NewElement, NodeId};

fn build(tags: &[&str]) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new();
    let body = doc.body();
    let nodes = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| doc.append_new(body, NewElement::new(tag).text(&format!("{tag}#{i}"))))
        .collect();
    (doc, nodes)
}

#[test]
fn test_scan_to_end_without_stop_marker() {
    let (doc, n) = build(&["p", "h1", "h2", "h1", "div", "h1"]);

    let found = locate(&doc, n[0], None, "h1", false);

    assert_eq!(found, vec![n[1], n[3], n[5]]);
}

#[test]
fn test_stop_marker_ends_scan_and_is_excluded() {
    let (doc, n) = build(&["h1", "h2", "p", "h2", "h1", "h2"]);

    let found = locate(&doc, n[0], Some("h1"), "h2", false);

    assert_eq!(found, vec![n[1], n[3]]);
}

#[test]
fn test_include_start_leads_result() {
    let (doc, n) = build(&["h1", "p", "h1"]);

    let found = locate(&doc, n[0], None, "h1", true);

    assert_eq!(found, vec![n[0], n[2]]);
}

#[test]
fn test_start_is_never_scanned_itself() {
    let (doc, n) = build(&["h1", "h1"]);

    assert_eq!(locate(&doc, n[0], None, "h1", false), vec![n[1]]);
}

#[test]
fn test_deeper_and_unknown_markers_do_not_stop() {
    let (doc, n) = build(&["h1", "h3", "h4", "aside", "h2", "h3"]);

    let found = locate(&doc, n[0], Some("h1"), "h2", false);

    assert_eq!(found, vec![n[4]]);
}

#[test]
fn test_shallower_than_stop_marker_is_skipped() {
    // Only the marker exactly one level up stops a scan.
    let (doc, n) = build(&["h2", "h1", "h3"]);

    let found = locate(&doc, n[0], Some("h2"), "h3", false);

    assert_eq!(found, vec![n[2]]);
}

#[test]
fn test_tags_compare_case_insensitively() {
    let (doc, n) = build(&["p", "H2", "h2"]);

    let found = locate(&doc, n[0], Some("H1"), "h2", false);

    assert_eq!(found.len(), 2);
    assert_eq!(doc.tag(found[0]), "h2");
}

#[test]
fn test_last_sibling_yields_nothing() {
    let (doc, n) = build(&["h1"]);

    assert!(locate(&doc, n[0], None, "h1", false).is_empty());
}

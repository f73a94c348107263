use super::{atx_level, strip_closing_sequence, MarkdownFormat};
use crate::config::Config;
use crate::document::{Document, DocumentTree};
use crate::formats::Format;
use crate::toc::generate;

fn headings(doc: &Document) -> Vec<(String, String)> {
    doc.children(doc.body())
        .filter(|&n| doc.tag(n).starts_with('h'))
        .map(|n| (doc.tag(n).to_string(), doc.text(n)))
        .collect()
}

const SAMPLE: &str = "# Intro\n\nSome text.\n\n## Background ##\n\n- a\n- b\n\n```\n# not a heading\n```\n\n### Deep\n\nMore.\n";

#[test]
fn test_parse_flattens_sections_into_siblings() {
    let doc = MarkdownFormat.parse(SAMPLE).unwrap();

    assert_eq!(
        headings(&doc),
        vec![
            ("h1".to_string(), "Intro".to_string()),
            ("h2".to_string(), "Background".to_string()),
            ("h3".to_string(), "Deep".to_string()),
        ]
    );
    assert!(doc.children(doc.body()).count() > 3);
    assert!(doc.children(doc.body()).all(|n| doc.is_source(n)));
}

#[test]
fn test_unmodified_document_round_trips() {
    let doc = MarkdownFormat.parse(SAMPLE).unwrap();
    assert_eq!(doc.serialize(), SAMPLE);

    let leading = "\n\n# Title\ntext";
    let doc = MarkdownFormat.parse(leading).unwrap();
    assert_eq!(doc.serialize(), leading);
    assert_eq!(headings(&doc), vec![("h1".to_string(), "Title".to_string())]);
}

#[test]
fn test_setext_headings() {
    let doc = MarkdownFormat.parse("Title\n=====\n\nSub title\n---\n\nBody\n").unwrap();

    assert_eq!(
        headings(&doc),
        vec![
            ("h1".to_string(), "Title".to_string()),
            ("h2".to_string(), "Sub title".to_string()),
        ]
    );
}

#[test]
fn test_nested_headings_stay_inside_their_block() {
    let doc = MarkdownFormat.parse("> # Quoted\n\n# Real\n").unwrap();

    assert_eq!(headings(&doc), vec![("h1".to_string(), "Real".to_string())]);
}

#[test]
fn test_empty_source_has_no_blocks() {
    let doc = MarkdownFormat.parse("").unwrap();

    assert_eq!(doc.first_child(doc.body()), None);
    assert_eq!(doc.serialize(), "");
}

#[test]
fn test_generated_document_anchors_headings() {
    let mut doc = MarkdownFormat
        .parse("# Intro\n\nText\n\n## Background\n\n## Method\n")
        .unwrap();

    let toc = generate(&mut doc, &Config::default()).unwrap();
    let out = doc.serialize();

    assert_eq!(toc.len(), 3);
    assert!(out.starts_with("<a id=\"toc_1\"></a>\n\n# Intro\n\nText\n\n<a id=\"toc_1.1\"></a>\n\n## Background\n\n<a id=\"toc_1.2\"></a>\n\n## Method\n\n<div id=\"tableOfContents\">\n"));
    assert!(out.contains("<a href=\"#toc_1.2\">Method</a>"));
    assert!(out.ends_with("</div>\n"));
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn test_closing_sequence_is_stripped() {
    assert_eq!(strip_closing_sequence(" Title ## "), "Title");
    assert_eq!(strip_closing_sequence("C#"), "C#");
    assert_eq!(strip_closing_sequence("##"), "");
    assert_eq!(strip_closing_sequence("Plain"), "Plain");
}

#[test]
fn test_atx_marker_levels() {
    assert_eq!(atx_level("atx_h1_marker"), Some(1));
    assert_eq!(atx_level("atx_h6_marker"), Some(6));
    assert_eq!(atx_level("atx_h7_marker"), None);
    assert_eq!(atx_level("inline"), None);
}

#[test]
fn test_heading_labels_drop_inline_syntax() {
    let doc = MarkdownFormat
        .parse("# The `foo` *fast* [path](http://x.y)\n\n**Bold** _move_\n===\n")
        .unwrap();

    assert_eq!(
        headings(&doc),
        vec![
            ("h1".to_string(), "The foo fast path".to_string()),
            ("h1".to_string(), "Bold move".to_string()),
        ]
    );
}

#[test]
fn test_heading_labels_keep_escaped_characters() {
    let doc = MarkdownFormat.parse("## Price \\*not\\* emphasis ##\n").unwrap();

    assert_eq!(
        headings(&doc),
        vec![("h2".to_string(), "Price *not* emphasis".to_string())]
    );
}

#[test]
fn test_generated_links_use_plain_heading_text() {
    let source = "# Using `tocweave`\n\n## See [docs](https://docs.rs \"Docs\")\n";
    let mut doc = MarkdownFormat.parse(source).unwrap();

    generate(&mut doc, &Config::default()).unwrap();
    let out = doc.serialize();

    assert!(out.contains("<a href=\"#toc_1\">Using tocweave</a>"));
    assert!(out.contains("<a href=\"#toc_1.1\">See docs</a>"));
    assert!(out.contains("# Using `tocweave`\n"));
}

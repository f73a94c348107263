//! Markdown format implementation using tree-sitter-md.
//!
//! This module parses markdown with the block grammar and flattens its nested sections into a
//! run of sibling blocks, so ATX and setext headings end up side by side with the paragraphs,
//! lists and code between them, the way headings sit in an HTML body. Each block keeps its exact
//! source slice, so writing the document back reproduces the input plus whatever was inserted.
//! Heading labels go through the inline grammar so emphasis, code and link syntax read as text.

use crate::document::{Document, NewElement};
use crate::error::{Error, Result};
use crate::formats::Format;
use std::collections::HashMap;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Tree-sitter queries for ATX (`#`) and setext (underlined) markdown headings.
pub struct MarkdownFormat;

struct Heading {
    level: usize,
    text: String,
}

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn parse(&self, source: &str) -> Result<Document> {
        let language = self.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parse(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::Parse("parser produced no tree".to_string()))?;

        let headings = self.headings(&language, tree.root_node(), source)?;

        let mut blocks: Vec<(usize, &'static str)> = Vec::new();
        collect_blocks(tree.root_node(), &mut blocks);
        blocks.sort_by_key(|(start, _)| *start);
        blocks.dedup_by_key(|(start, _)| *start);
        if blocks.is_empty() && !source.is_empty() {
            blocks.push((0, "text"));
        }

        let mut doc = Document::new();
        let body = doc.body();
        for (i, &(start, kind)) in blocks.iter().enumerate() {
            // Leading blank lines travel with the first block.
            let from = if i == 0 { 0 } else { start };
            let end = blocks.get(i + 1).map_or(source.len(), |(next, _)| *next);
            let slice = source
                .get(from..end)
                .ok_or_else(|| Error::Parse(format!("block {from}..{end} splits a character")))?;

            let element = match headings.get(&start) {
                Some(heading) => NewElement::new(&format!("h{}", heading.level))
                    .text(&heading.text)
                    .source(slice),
                None => NewElement::new(kind).source(slice),
            };
            doc.append_new(body, element);
        }

        log::debug!("Parsed {} blocks, {} headings", blocks.len(), headings.len());
        Ok(doc)
    }
}

impl MarkdownFormat {
    fn headings(
        &self,
        language: &tree_sitter::Language,
        root: Node<'_>,
        source: &str,
    ) -> Result<HashMap<usize, Heading>> {
        let query =
            Query::new(language, self.heading_query()).map_err(|e| Error::Parse(e.to_string()))?;
        let mut inline = Parser::new();
        inline
            .set_language(&tree_sitter_md::INLINE_LANGUAGE.into())
            .map_err(|e| Error::Parse(e.to_string()))?;

        let bytes = source.as_bytes();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, root, bytes);

        let mut headings = HashMap::new();
        while let Some(m) = matches.next() {
            for cap in m.captures {
                if let Some(heading) = read_heading(cap.node, source, &mut inline) {
                    headings.insert(cap.node.start_byte(), heading);
                }
            }
        }
        Ok(headings)
    }
}

fn collect_blocks(node: Node<'_>, blocks: &mut Vec<(usize, &'static str)>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "section" {
            collect_blocks(child, blocks);
        } else {
            blocks.push((child.start_byte(), child.kind()));
        }
    }
}

fn read_heading(node: Node<'_>, source: &str, inline: &mut Parser) -> Option<Heading> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();

    let content = node
        .child_by_field_name("heading_content")
        .or_else(|| {
            children
                .iter()
                .copied()
                .find(|c| matches!(c.kind(), "inline" | "paragraph"))
        })
        .and_then(|c| c.utf8_text(source.as_bytes()).ok())
        .unwrap_or_default();

    let level = children.iter().find_map(|c| match c.kind() {
        "setext_h1_underline" => Some(1),
        "setext_h2_underline" => Some(2),
        kind => atx_level(kind),
    })?;

    let content = match node.kind() {
        "atx_heading" => strip_closing_sequence(content),
        "setext_heading" => content,
        _ => return None,
    };
    Some(Heading {
        level,
        text: inline_text(content, inline),
    })
}

/// Inline nodes whose text never shows in the rendered heading.
const HIDDEN_INLINE: &[&str] = &[
    "emphasis_delimiter",
    "code_span_delimiter",
    "link_destination",
    "link_title",
    "link_label",
    "html_tag",
];

/// Inline nodes whose bracket and paren tokens are syntax rather than text.
const LINK_LIKE: &[&str] = &[
    "inline_link",
    "full_reference_link",
    "collapsed_reference_link",
    "shortcut_link",
    "image",
    "link_text",
    "image_description",
];

/// Text of inline markdown as it reads once rendered, whitespace collapsed.
fn inline_text(content: &str, inline: &mut Parser) -> String {
    let mut text = String::new();
    match inline.parse(content, None) {
        Some(tree) => push_plain_text(tree.root_node(), content, &mut text),
        None => text.push_str(content),
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_plain_text(node: Node<'_>, source: &str, out: &mut String) {
    let mut pos = node.start_byte();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        out.push_str(source.get(pos..child.start_byte()).unwrap_or_default());
        pos = child.end_byte();

        let kind = child.kind();
        if HIDDEN_INLINE.contains(&kind) || (!child.is_named() && LINK_LIKE.contains(&node.kind()))
        {
            continue;
        }
        if kind == "backslash_escape" {
            out.push_str(
                source
                    .get(child.start_byte() + 1..child.end_byte())
                    .unwrap_or_default(),
            );
            continue;
        }
        push_plain_text(child, source, out);
    }
    out.push_str(source.get(pos..node.end_byte()).unwrap_or_default());
}

fn atx_level(kind: &str) -> Option<usize> {
    let digit = kind.strip_prefix("atx_h")?.strip_suffix("_marker")?;
    digit.parse().ok().filter(|level| (1..=6).contains(level))
}

/// Drop an optional closing run of `#` preceded by whitespace, as in `## Title ##`.
fn strip_closing_sequence(text: &str) -> &str {
    let text = text.trim();
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        text
    } else if without.is_empty() {
        ""
    } else if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;

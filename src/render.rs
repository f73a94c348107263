//! Materialising a built table of contents as markup, and toggling its visibility.
//!
//! The block mirrors the layout readers of the generated pages already style against:
//! a clickable label with a collapse/expand indicator, then a list container holding a
//! "top of page" link followed by one nested `ol.levelN` per non-empty level.

use crate::document::{DocumentTree, NewElement};
use crate::error::{Error, Result};
use crate::toc::{OrderedList, TableOfContents, TocEntry};

/// Id of the outer block.
pub const BLOCK_ID: &str = "tableOfContents";
/// Id of the clickable label.
pub const LABEL_ID: &str = "tableOfContentsLabel";
/// Id of the element holding the list; it carries [`COLLAPSED_CLASS`] while hidden.
pub const LIST_ID: &str = "tableOfContentsList";
/// Id of the collapse/expand indicator inside the label.
pub const INDICATOR_ID: &str = "tableOfContentsIndicator";
/// Class marking the list as hidden.
pub const COLLAPSED_CLASS: &str = "collapsed";

const LABEL_TEXT: &str = "Table of contents";
const LABEL_TITLE: &str = "Collapse/expand this Table of Contents block";
const TOGGLE_CALL: &str = "toggleTableOfContentsList()";

const TOGGLE_SCRIPT: &str = "function toggleTableOfContentsList() {
  var list = document.getElementById('tableOfContentsList');
  var collapsed = list.classList.toggle('collapsed');
  document.getElementById('tableOfContentsIndicator').textContent = collapsed ? '\u{25b8}' : '\u{25be}';
}";

fn indicator(expanded: bool) -> &'static str {
    if expanded {
        "\u{25be}"
    } else {
        "\u{25b8}"
    }
}

/// Text shown for `entry`, prefixed by its identifier when numbering is on.
#[must_use]
pub fn display_label(entry: &TocEntry, numbered: bool) -> String {
    if numbered {
        format!("{} {}", entry.id, entry.label)
    } else {
        entry.label.clone()
    }
}

/// Append the table of contents block to `container`, returning the block.
pub fn materialize<D: DocumentTree>(
    doc: &mut D,
    container: D::Node,
    toc: &TableOfContents,
) -> D::Node {
    let block = doc.create_element(NewElement::new("div").attr("id", BLOCK_ID));
    doc.append_child(container, block);

    let label = doc.create_element(
        NewElement::new("div")
            .attr("id", LABEL_ID)
            .attr("onclick", TOGGLE_CALL)
            .attr("title", LABEL_TITLE),
    );
    doc.append_child(block, label);
    append(
        doc,
        label,
        NewElement::new("span")
            .attr("id", INDICATOR_ID)
            .text(indicator(toc.expanded)),
    );
    append(doc, label, NewElement::new("span").text(&format!(" {LABEL_TEXT}")));

    let mut list = NewElement::new("div").attr("id", LIST_ID);
    if !toc.expanded {
        list = list.attr("class", COLLAPSED_CLASS);
    }
    let list = append(doc, block, list);

    let meta = append(doc, list, NewElement::new("div").attr("class", "meta"));
    append(
        doc,
        meta,
        NewElement::new("a")
            .attr("href", "#")
            .attr("title", "Top of page")
            .text("[Top of page]"),
    );

    if let Some(ordered) = &toc.list {
        append_list(doc, list, ordered, toc.numbered);
    }

    append(doc, block, NewElement::new("script").text(TOGGLE_SCRIPT));
    block
}

fn append<D: DocumentTree>(doc: &mut D, parent: D::Node, element: NewElement) -> D::Node {
    let node = doc.create_element(element);
    doc.append_child(parent, node);
    node
}

fn append_list<D: DocumentTree>(
    doc: &mut D,
    parent: D::Node,
    list: &OrderedList,
    numbered: bool,
) {
    let ol = append(
        doc,
        parent,
        NewElement::new("ol").attr("class", &format!("level{}", list.level)),
    );
    for entry in &list.entries {
        let li = append(doc, ol, NewElement::new("li"));
        append(
            doc,
            li,
            NewElement::new("a")
                .attr("href", &format!("#{}", entry.anchor))
                .text(&display_label(entry, numbered)),
        );
        if let Some(sublist) = &entry.sublist {
            append_list(doc, li, sublist, numbered);
        }
    }
}

/// Flip the visibility of a materialised list and its indicator.
///
/// Returns whether the list is expanded afterwards. Toggling twice restores the original state.
///
/// # Errors
///
/// Returns an error if the document holds no table of contents list.
pub fn toggle<D: DocumentTree>(doc: &mut D) -> Result<bool> {
    log::debug!("Toggling Table of contents");

    let selector = format!("#{LIST_ID}");
    let list = doc
        .select(&selector)
        .ok_or(Error::MissingElement(selector))?;
    let expanded = !doc.toggle_class(list, COLLAPSED_CLASS);

    if let Some(node) = doc.select(&format!("#{INDICATOR_ID}")) {
        doc.set_text(node, indicator(expanded));
    }
    Ok(expanded)
}

/// Render the entries as an indented markdown list of links, one line per heading.
#[must_use]
pub fn outline(toc: &TableOfContents) -> String {
    fn walk(list: &OrderedList, depth: usize, numbered: bool, out: &mut String) {
        for entry in &list.entries {
            out.push_str(&format!(
                "{}- [{}](#{})\n",
                "  ".repeat(depth),
                display_label(entry, numbered),
                entry.anchor
            ));
            if let Some(sublist) = &entry.sublist {
                walk(sublist, depth + 1, numbered, out);
            }
        }
    }

    let mut out = String::new();
    if let Some(list) = &toc.list {
        walk(list, 0, toc.numbered, &mut out);
    }
    out
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;

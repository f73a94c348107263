//! Heading-tree traversal and hierarchical numbering.
//!
//! Headings arrive as a flat run of siblings interspersed with other content. The hierarchy is
//! recovered one level at a time: a frame collects the headings of its level that follow its
//! search origin, numbers them by rank, anchors each one in the document, and opens a child frame
//! on every heading to look for the next level down. Descent stops at the deepest configured
//! level or as soon as a level yields no headings, so termination never depends on document shape.

use crate::config::Config;
use crate::document::{DocumentTree, NewElement};
use crate::error::{Error, Result};
use crate::heading::{HeadingId, HeadingLevels, Level};
use crate::locator::locate;
use crate::render;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One heading in the table of contents.
pub struct TocEntry {
    /// Hierarchical identifier, e.g. `1.2`.
    pub id: HeadingId,
    /// Heading text as it read during traversal.
    pub label: String,
    /// Key of the anchor inserted before the heading.
    pub anchor: String,
    /// Headings nested under this one, absent when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublist: Option<OrderedList>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Ordered list holding the headings of one level under a common parent.
pub struct OrderedList {
    /// Level of every entry in the list.
    pub level: Level,
    /// Entries in document order.
    pub entries: Vec<TocEntry>,
}

impl OrderedList {
    fn new(level: Level) -> Self {
        Self {
            level,
            entries: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Result of one generation pass.
pub struct TableOfContents {
    /// Whether the rendered list starts out visible.
    pub expanded: bool,
    /// Whether identifiers are displayed in front of labels.
    pub numbered: bool,
    /// Top-level headings, absent when the document has none.
    pub list: Option<OrderedList>,
}

impl TableOfContents {
    #[must_use]
    /// All entries in document order, parents before their children.
    pub fn entries(&self) -> Vec<&TocEntry> {
        fn walk<'a>(list: &'a OrderedList, out: &mut Vec<&'a TocEntry>) {
            for entry in &list.entries {
                out.push(entry);
                if let Some(sublist) = &entry.sublist {
                    walk(sublist, out);
                }
            }
        }

        let mut out = Vec::new();
        if let Some(list) = &self.list {
            walk(list, &mut out);
        }
        out
    }

    #[must_use]
    /// Number of headings listed.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    /// Whether no heading was found.
    pub fn is_empty(&self) -> bool {
        self.list.is_none()
    }
}

/// Recursion state for one level of the traversal.
///
/// Each frame is owned by a single descent and handed to no one else; child frames borrow the
/// entry they hang under for their prefix and list slot.
pub(crate) struct Frame<'a, N> {
    level: Level,
    parent_prefix: Option<&'a HeadingId>,
    target: &'a mut Option<OrderedList>,
    search_origin: N,
}

impl<'a, N> Frame<'a, N> {
    #[must_use]
    /// Frame scanning from `search_origin` for headings at `level`, filling `target`.
    pub(crate) fn new(
        level: Level,
        parent_prefix: Option<&'a HeadingId>,
        target: &'a mut Option<OrderedList>,
        search_origin: N,
    ) -> Self {
        Self {
            level,
            parent_prefix,
            target,
            search_origin,
        }
    }
}

struct Builder<'d, D: DocumentTree> {
    doc: &'d mut D,
    levels: &'d HeadingLevels,
}

impl<D: DocumentTree> Builder<'_, D> {
    fn build_level(&mut self, frame: Frame<'_, D::Node>) {
        let levels = self.levels;
        let target = levels.marker(frame.level);
        let stop = levels.stop_marker(frame.level);
        let include_start = self
            .doc
            .tag(frame.search_origin)
            .eq_ignore_ascii_case(target);

        let headings = locate(&*self.doc, frame.search_origin, stop, target, include_start);
        if headings.is_empty() {
            return;
        }

        let list = frame.target.insert(OrderedList::new(frame.level));
        for (k, heading) in headings.into_iter().enumerate() {
            let id = HeadingId::under(frame.parent_prefix, k + 1);
            let anchor = id.anchor_key();

            let anchor_node = self
                .doc
                .create_element(NewElement::new("a").attr("id", &anchor));
            self.doc.insert_before(heading, anchor_node);

            let label = self.doc.text(heading).trim().to_string();
            log::debug!("Added heading {id}");
            list.entries.push(TocEntry {
                id,
                label,
                anchor,
                sublist: None,
            });

            if let (Some(next), Some(entry)) = (levels.next(frame.level), list.entries.last_mut())
            {
                self.build_level(Frame::new(
                    next,
                    Some(&entry.id),
                    &mut entry.sublist,
                    heading,
                ));
            }
        }
    }
}

/// Number the headings following `start` and anchor each of them in `doc`.
///
/// `start` is the first child of the container being indexed; it is itself collected when it is
/// an outermost heading. Returns the top-level list, or `None` when no outermost heading exists.
pub fn build<D: DocumentTree>(
    doc: &mut D,
    levels: &HeadingLevels,
    start: D::Node,
) -> Option<OrderedList> {
    let mut list = None;
    let mut builder = Builder { doc, levels };
    builder.build_level(Frame::new(levels.root(), None, &mut list, start));
    list
}

/// Generate the table of contents for `doc` and append its block to the start container.
///
/// The document must be fully constructed before this is called, and it should run once per
/// document: a second pass inserts a second set of anchors and a second block.
///
/// # Errors
///
/// Returns an error if the configured heading levels are invalid or the start selector matches
/// nothing.
pub fn generate<D: DocumentTree>(doc: &mut D, config: &Config) -> Result<TableOfContents> {
    log::info!(
        "Generating ToC and adding the block to '{}'",
        config.start_item_identifier
    );

    let levels = config.heading_levels()?;
    let container = doc
        .select(&config.start_item_identifier)
        .ok_or_else(|| Error::MissingContainer(config.start_item_identifier.clone()))?;

    let list = match doc.first_child(container) {
        Some(start) => build(doc, &levels, start),
        None => None,
    };

    let toc = TableOfContents {
        expanded: config.expanded_by_default,
        numbered: config.use_numbering,
        list,
    };
    render::materialize(doc, container, &toc);

    log::info!("ToC generated with {} headings", toc.len());
    Ok(toc)
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;

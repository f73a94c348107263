//! Heading levels and hierarchical identifiers.
//!
//! A heading level indexes into the configured, ordered list of marker kinds (`h1` outermost).
//! A hierarchical identifier records a heading's path from the root as 1-based sibling ranks,
//! so `[2, 1, 3]` is the third child of the first child of the second top-level heading.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Hard upper bound on the number of heading levels a traversal may descend through.
pub const MAX_LEVELS: usize = 6;

/// Prefix of every anchor key inserted in front of a heading.
pub const ANCHOR_PREFIX: &str = "toc_";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Validated, ordered marker kinds, one per heading level.
pub struct HeadingLevels {
    markers: Vec<String>,
}

impl HeadingLevels {
    /// Normalise and validate a list of marker kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, holds more than [`MAX_LEVELS`] markers, contains a
    /// blank marker, or names the same marker twice.
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self> {
        if markers.is_empty() {
            return Err(Error::InvalidHeadingLevels(
                "at least one marker is required".to_string(),
            ));
        }
        if markers.len() > MAX_LEVELS {
            return Err(Error::InvalidHeadingLevels(format!(
                "{} markers given, at most {MAX_LEVELS} are supported",
                markers.len()
            )));
        }

        let mut normalised: Vec<String> = Vec::with_capacity(markers.len());
        for marker in markers {
            let marker = marker.as_ref().trim().to_ascii_lowercase();
            if marker.is_empty() {
                return Err(Error::InvalidHeadingLevels("blank marker".to_string()));
            }
            if normalised.contains(&marker) {
                return Err(Error::InvalidHeadingLevels(format!(
                    "marker '{marker}' listed twice"
                )));
            }
            normalised.push(marker);
        }

        Ok(Self {
            markers: normalised,
        })
    }

    #[must_use]
    /// Number of configured levels.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    /// Always false: validation rejects an empty marker list.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    /// Outermost level.
    pub fn root(&self) -> Level {
        Level(0)
    }

    #[must_use]
    /// Marker kind collected at `level`.
    pub fn marker(&self, level: Level) -> &str {
        &self.markers[level.0]
    }

    #[must_use]
    /// Marker kind one level shallower, which bounds the scan at `level`.
    pub fn stop_marker(&self, level: Level) -> Option<&str> {
        level.0.checked_sub(1).map(|i| self.markers[i].as_str())
    }

    #[must_use]
    /// Level whose marker equals `tag`, compared case-insensitively.
    pub fn level_of(&self, tag: &str) -> Option<Level> {
        self.markers
            .iter()
            .position(|m| m.eq_ignore_ascii_case(tag))
            .map(Level)
    }

    #[must_use]
    /// Level below `level`, or `None` at the deepest configured level.
    pub fn next(&self, level: Level) -> Option<Level> {
        let next = level.0 + 1;
        (next < self.markers.len()).then_some(Level(next))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Depth in the heading hierarchy, 0 being outermost.
///
/// Only handed out by [`HeadingLevels`], so a level is always in range for the markers it came
/// from.
pub struct Level(usize);

impl Level {
    #[must_use]
    /// Zero-based depth.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Path of 1-based sibling ranks from the root to a heading.
pub struct HeadingId(Vec<usize>);

impl HeadingId {
    #[must_use]
    /// Identifier of a top-level heading.
    pub fn root(rank: usize) -> Self {
        Self(vec![rank])
    }

    #[must_use]
    /// Identifier of the `rank`-th child of this heading.
    pub fn child(&self, rank: usize) -> Self {
        let mut ranks = Vec::with_capacity(self.0.len() + 1);
        ranks.extend_from_slice(&self.0);
        ranks.push(rank);
        Self(ranks)
    }

    #[must_use]
    /// Identifier for `rank` under an optional parent prefix.
    pub fn under(parent: Option<&Self>, rank: usize) -> Self {
        parent.map_or_else(|| Self::root(rank), |p| p.child(rank))
    }

    #[must_use]
    /// The ranks making up this identifier.
    pub fn ranks(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    /// Number of levels from the root, 1 for top-level headings.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// Key of the anchor inserted in front of the heading, e.g. `toc_2.1`.
    pub fn anchor_key(&self) -> String {
        format!("{ANCHOR_PREFIX}{self}")
    }
}

impl fmt::Display for HeadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{rank}")?;
        }
        Ok(())
    }
}

impl Serialize for HeadingId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;

//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over source formats by providing the
//! tree-sitter grammar and heading query for each, and turning a source file into the flat
//! document tree the table of contents is built against.

pub mod markdown;

use crate::document::Document;
use crate::error::Result;

/// A source format that can be parsed into a [`Document`].
pub trait Format {
    /// Grammar used to parse the source.
    fn language(&self) -> tree_sitter::Language;

    /// Query capturing every heading node as `@heading`.
    fn heading_query(&self) -> &str;

    /// Parse `source` into a document whose body children are its top-level blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the source cannot be parsed.
    fn parse(&self, source: &str) -> Result<Document>;
}

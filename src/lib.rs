//! tocweave: hierarchically numbered tables of contents for heading-structured documents.
//!
//! A document's headings sit in a flat run of siblings. [`toc::generate`] recovers their
//! nesting from the marker levels, numbers each heading by its rank under its parent (`2.1.3`),
//! inserts an anchor in front of it, and appends a collapsible block listing them all.
//!
//! ```no_run
//! use tocweave::{config::Config, formats::markdown::MarkdownFormat, formats::Format, toc};
//!
//! let mut doc = MarkdownFormat.parse("# Intro\n\n## Background\n")?;
//! let contents = toc::generate(&mut doc, &Config::default())?;
//! assert_eq!(contents.len(), 2);
//! println!("{}", doc.serialize());
//! # Ok::<(), tocweave::error::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod heading;
pub mod locator;
pub mod render;
pub mod toc;

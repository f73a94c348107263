//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a tocweave.toml, and if present we load settings from there.
//! This provides the recognised heading markers, the container to scan and the display options
//! of the generated block. Values are passed explicitly into the build, never held globally.

use crate::error::{Error, Result};
use crate::heading::HeadingLevels;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "tocweave.toml";

/// Selector of the container whose children are scanned when none is configured.
pub const DEFAULT_START_ITEM: &str = "body";

/// The six heading markers recognised out of the box, outermost first.
#[must_use]
pub fn default_heading_levels() -> Vec<String> {
    ["h1", "h2", "h3", "h4", "h5", "h6"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from tocweave.toml or falling back to defaults.
pub struct Config {
    #[facet(default = default_heading_levels())]
    /// Ordered marker kinds, one per heading level, outermost first.
    pub supported_heading_levels: Vec<String>,
    #[facet(default = DEFAULT_START_ITEM.to_string())]
    /// Selector for the container whose children are scanned for headings.
    pub start_item_identifier: String,
    #[facet(default = true)]
    /// Whether the generated list starts out visible.
    pub expanded_by_default: bool,
    #[facet(default = false)]
    /// Whether hierarchical identifiers are shown in front of each label.
    pub use_numbering: bool,
    #[facet(default = false)]
    /// Whether diagnostic tracing is emitted.
    pub use_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supported_heading_levels: default_heading_levels(),
            start_item_identifier: DEFAULT_START_ITEM.to_string(),
            expanded_by_default: true,
            use_numbering: false,
            use_logging: false,
        }
    }
}

impl Config {
    /// Load configuration from tocweave.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).map_err(|reason| Error::Config {
                path: path.display().to_string(),
                reason,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    /// Validate the configured markers into indexable heading levels.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker list is empty, too long, or repeats a marker.
    pub fn heading_levels(&self) -> Result<HeadingLevels> {
        HeadingLevels::new(self.supported_heading_levels.as_slice())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

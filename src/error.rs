//! Error types shared by the library and the command line front-end.
//!
//! The traversal itself is total over every document shape; errors only arise at the edges,
//! when reading files, loading configuration or resolving the container to scan.

/// Result type alias for tocweave operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced while preparing, building or writing a table of contents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("Invalid configuration in {path}: {reason}")]
    Config {
        /// File the configuration was read from
        path: String,
        /// Parser message
        reason: String,
    },

    /// The configured marker kinds cannot index heading levels.
    #[error("Invalid supported heading levels: {0}")]
    InvalidHeadingLevels(String),

    /// The start selector resolved to nothing in the document.
    #[error("No element matches start selector '{0}'")]
    MissingContainer(String),

    /// An element the table of contents relies on is absent.
    #[error("No element matches '{0}'")]
    MissingElement(String),

    /// The source document could not be parsed.
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for browser operations

use thiserror::Error;

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Errors that can occur while driving the browser
///
/// Catalog load failures never surface here: they are logged and
/// absorbed at the load boundary.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Selection referenced an id that is not in the catalog
    #[error("Unknown record: {0}")]
    UnknownRecord(String),
}

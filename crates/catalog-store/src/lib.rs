//! Use Case Catalog Storage Layer
//!
//! Loads the static catalog document and turns it into domain [`Record`]s.
//!
//! # Document format
//!
//! ```json
//! { "data": [ { "name": "Course site", "description": "...", "tags": ["Education"] } ] }
//! ```
//!
//! A bare top-level array is accepted as well. Field names vary between
//! catalog revisions, so the parser accepts `name`/`title`,
//! `demo_link`/`demo` and `imageURL`/`image_url`/`image`. Missing or `null`
//! fields fall back to empty values instead of failing the load.
//!
//! # Examples
//!
//! ```no_run
//! use catalog_store::CatalogSource;
//!
//! # async fn run() -> Result<(), catalog_store::StoreError> {
//! let source = CatalogSource::from_location("data/use-case-data.json");
//! let records = source.load().await?;
//! println!("loaded {} use cases", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`Record`]: catalog_domain::Record

#![warn(missing_docs)]

mod parse;
mod source;

pub use parse::parse_catalog;
pub use source::{CatalogSource, DEFAULT_TIMEOUT_SECS};

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading a catalog file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status {
        /// Requested URL
        url: String,
        /// Status code returned
        status: u16,
    },

    /// The document is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but not a catalog document
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

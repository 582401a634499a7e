//! Catalog sources: where the static document comes from.

use crate::{parse_catalog, Result, StoreError};
use catalog_domain::Record;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Default timeout for HTTP catalog fetches (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A read-only provider of the catalog document
///
/// Loading is a single best-effort read: there is no caching and no retry.
/// Callers decide what a failure means (the browser logs it and keeps an
/// empty catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON file on the local filesystem
    File(PathBuf),

    /// Document held in memory (tests, embedded data)
    Inline(String),

    /// Document served over HTTP(S)
    Http(String),
}

impl CatalogSource {
    /// Pick a source from a location string
    ///
    /// `http://` and `https://` locations are fetched over the network;
    /// anything else is treated as a file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_store::CatalogSource;
    ///
    /// assert!(matches!(CatalogSource::from_location("https://x/data.json"), CatalogSource::Http(_)));
    /// assert!(matches!(CatalogSource::from_location("lib/data.json"), CatalogSource::File(_)));
    /// ```
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Http(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }

    /// Read and parse the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or fetched, or if it
    /// is not a catalog document.
    pub async fn load(&self) -> Result<Vec<Record>> {
        tracing::debug!("Loading catalog from {}", self);

        let body = match self {
            CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
            CatalogSource::Inline(json) => json.clone(),
            CatalogSource::Http(url) => fetch(url).await?,
        };

        parse_catalog(&body)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "file {}", path.display()),
            CatalogSource::Inline(json) => write!(f, "inline document ({} bytes)", json.len()),
            CatalogSource::Http(url) => write!(f, "{}", url),
        }
    }
}

async fn fetch(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

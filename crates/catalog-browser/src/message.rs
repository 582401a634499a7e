//! Typed messages from the presentation layer

use catalog_domain::{RecordId, TagMode};

/// A user intent, applied to the browser by [`CatalogBrowser::handle`]
///
/// [`CatalogBrowser::handle`]: crate::CatalogBrowser::handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Replace the active tag set
    SetActiveTags(Vec<String>),

    /// Flip one tag on or off
    ToggleTag(String),

    /// Replace the search query
    SetSearchQuery(String),

    /// Drop all tags and the query
    ClearFilters,

    /// Switch the tag combination policy
    SetMode(TagMode),

    /// Toggle selection of a record
    Select(RecordId),
}

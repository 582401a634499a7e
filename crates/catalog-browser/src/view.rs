//! Derived view handed to the presentation layer

use catalog_domain::{Record, RecordId, TagMode};

/// Everything a presentation layer needs to render one frame
///
/// Recomputed from the browser's state on every change and never stored
/// back. Records are cloned out of the catalog so the view can outlive the
/// borrow of the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    /// Visible records, in catalog order
    pub records: Vec<Record>,

    /// Size of the full catalog
    pub total: usize,

    /// Tag universe of the full catalog, first-seen order
    pub available_tags: Vec<String>,

    /// Active tags, activation order
    pub active_tags: Vec<String>,

    /// Search query as entered
    pub search_query: String,

    /// Tag combination policy in effect
    pub mode: TagMode,

    /// Current selection, if any
    pub selected: Option<RecordId>,
}

impl FilteredView {
    /// Number of visible records
    pub fn results(&self) -> usize {
        self.records.len()
    }

    /// Check whether `id` is the selected record
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Check whether `tag` is active
    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// The selected record, if it is currently visible
    pub fn selected_record(&self) -> Option<&Record> {
        let selected = self.selected.as_ref()?;
        self.records.iter().find(|r| &r.id == selected)
    }

    /// Human-readable result count, e.g. "2 of 5 use cases"
    pub fn summary(&self) -> String {
        format!("{} of {} use cases", self.results(), self.total)
    }
}

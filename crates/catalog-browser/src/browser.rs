//! Catalog browser controller: owns the catalog and all filter/selection state

use crate::{BrowserConfig, BrowserError, FilteredView, Message, Result};
use catalog_domain::{available_tags, filter_with, select, FilterState, Record, RecordId, TagMode};
use catalog_store::CatalogSource;
use std::fmt::Display;

/// Single owner of the catalog, the filter state and the selection
///
/// Presentation code never mutates records or filter state directly; it
/// calls the methods below (or sends a [`Message`]) and renders the returned
/// [`FilteredView`]. Every state change is applied before the next view is
/// computed.
///
/// # Examples
///
/// ```
/// use catalog_browser::{BrowserConfig, CatalogBrowser};
/// use catalog_domain::{Record, RecordId};
///
/// let mut browser = CatalogBrowser::new(BrowserConfig::default());
/// browser.apply_load(Ok::<_, String>(vec![
///     Record::new(RecordId::new("a"), "Alpha", "", vec!["edu".into()]),
///     Record::new(RecordId::new("b"), "Beta", "", vec!["gov".into(), "edu".into()]),
/// ]));
///
/// browser.toggle_tag("gov");
/// let view = browser.view();
/// assert_eq!(view.summary(), "1 of 2 use cases");
/// ```
#[derive(Debug)]
pub struct CatalogBrowser {
    config: BrowserConfig,
    catalog: Vec<Record>,
    filters: FilterState,
    selection: Option<RecordId>,
}

impl CatalogBrowser {
    /// Create a browser with an empty catalog
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            catalog: Vec::new(),
            filters: FilterState::new(),
            selection: None,
        }
    }

    /// Create a browser with default configuration
    pub fn default_config() -> Self {
        Self::new(BrowserConfig::default())
    }

    /// The configuration in effect
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// The full catalog
    pub fn catalog(&self) -> &[Record] {
        &self.catalog
    }

    /// Current filter state
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current selection
    pub fn selection(&self) -> Option<&RecordId> {
        self.selection.as_ref()
    }

    /// Current tag mode
    pub fn mode(&self) -> TagMode {
        self.config.tag_mode
    }

    /// Look up a record by id
    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.catalog.iter().find(|r| &r.id == id)
    }

    /// Load the catalog from `source`
    ///
    /// Never fails: see [`CatalogBrowser::apply_load`].
    pub async fn load(&mut self, source: &CatalogSource) {
        let result = source.load().await;
        if let Err(e) = &result {
            tracing::debug!("Catalog source {} failed: {:?}", source, e);
        }
        self.apply_load(result);
    }

    /// Install the outcome of a catalog load
    ///
    /// On success the catalog is replaced, the selection is dropped and any
    /// active tag that no longer exists is deactivated. On failure the error
    /// is logged and the catalog is left empty.
    pub fn apply_load<E: Display>(&mut self, result: std::result::Result<Vec<Record>, E>) {
        match result {
            Ok(records) => {
                tracing::info!("Catalog loaded: {} use cases", records.len());
                self.catalog = records;

                let tags = available_tags(&self.catalog);
                self.filters.retain_tags(|tag| tags.contains(tag));
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                self.catalog.clear();
                self.filters.retain_tags(|_| false);
            }
        }
        self.selection = None;
    }

    /// Replace the active tag set
    pub fn set_active_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.set_active_tags(tags);
        tracing::debug!("Active tags set to {:?}", self.filters.active_tags());
    }

    /// Toggle one tag; returns whether it is now active
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let active = self.filters.toggle_tag(tag);
        tracing::debug!("Tag '{}' {}", tag, if active { "activated" } else { "deactivated" });
        active
    }

    /// Replace the search query
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filters.set_search_query(query);
        tracing::debug!("Search query set to {:?}", self.filters.search_query());
    }

    /// Drop all tags and the search query
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        tracing::debug!("Filters cleared");
    }

    /// Switch the tag combination policy
    pub fn set_mode(&mut self, mode: TagMode) {
        self.config.tag_mode = mode;
        tracing::debug!("Tag mode set to {}", mode);
    }

    /// Toggle selection of `id`
    ///
    /// Selecting the selected record clears the selection; selecting another
    /// record replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::UnknownRecord`] if `id` is not in the catalog;
    /// the selection is left unchanged.
    pub fn select(&mut self, id: &RecordId) -> Result<Option<&RecordId>> {
        if self.record(id).is_none() {
            return Err(BrowserError::UnknownRecord(id.to_string()));
        }
        self.selection = select(self.selection.as_ref(), id);
        tracing::debug!("Selection is now {:?}", self.selection);
        Ok(self.selection.as_ref())
    }

    /// Apply a message and return the recomputed view
    pub fn handle(&mut self, message: Message) -> Result<FilteredView> {
        match message {
            Message::SetActiveTags(tags) => self.set_active_tags(tags),
            Message::ToggleTag(tag) => {
                self.toggle_tag(&tag);
            }
            Message::SetSearchQuery(query) => self.set_search_query(query),
            Message::ClearFilters => self.clear_filters(),
            Message::SetMode(mode) => self.set_mode(mode),
            Message::Select(id) => {
                self.select(&id)?;
            }
        }
        Ok(self.view())
    }

    /// Compute the view for the current state
    pub fn view(&self) -> FilteredView {
        let records = filter_with(&self.catalog, &self.filters, self.config.tag_mode)
            .into_iter()
            .cloned()
            .collect();

        FilteredView {
            records,
            total: self.catalog.len(),
            available_tags: available_tags(&self.catalog),
            active_tags: self.filters.active_tags().to_vec(),
            search_query: self.filters.search_query().to_string(),
            mode: self.config.tag_mode,
            selected: self.selection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, tags: &[&str]) -> Record {
        Record::new(
            RecordId::new(id),
            name,
            format!("{} description", name),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn loaded_browser() -> CatalogBrowser {
        let mut browser = CatalogBrowser::default_config();
        browser.apply_load(Ok::<_, String>(vec![
            record("alpha", "Alpha", &["edu"]),
            record("beta", "Beta", &["gov", "edu"]),
            record("gamma", "Gamma", &["blog"]),
        ]));
        browser
    }

    fn names(view: &FilteredView) -> Vec<&str> {
        view.records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_browser_starts_empty() {
        let browser = CatalogBrowser::default_config();
        let view = browser.view();
        assert!(view.records.is_empty());
        assert_eq!(view.total, 0);
        assert!(view.available_tags.is_empty());
        assert_eq!(view.summary(), "0 of 0 use cases");
    }

    #[test]
    fn test_load_failure_leaves_catalog_empty() {
        let mut browser = loaded_browser();
        browser.toggle_tag("edu");

        browser.apply_load(Err::<Vec<Record>, _>("network down"));

        assert!(browser.catalog().is_empty());
        assert!(browser.filters().active_tags().is_empty());
        assert!(browser.view().records.is_empty());
    }

    #[test]
    fn test_reload_drops_stale_tags_and_selection() {
        let mut browser = loaded_browser();
        browser.set_active_tags(["gov", "blog"]);
        browser.select(&RecordId::new("alpha")).unwrap();

        browser.apply_load(Ok::<_, String>(vec![record("delta", "Delta", &["gov"])]));

        assert_eq!(browser.filters().active_tags(), &["gov".to_string()]);
        assert!(browser.selection().is_none());
    }

    #[test]
    fn test_view_reflects_filters() {
        let mut browser = loaded_browser();

        assert_eq!(names(&browser.view()), vec!["Alpha", "Beta", "Gamma"]);

        browser.toggle_tag("edu");
        assert_eq!(names(&browser.view()), vec!["Alpha", "Beta"]);

        browser.set_search_query("bet");
        assert_eq!(names(&browser.view()), vec!["Beta"]);

        browser.clear_filters();
        assert_eq!(browser.view().results(), 3);
    }

    #[test]
    fn test_mode_switch() {
        let mut browser = loaded_browser();
        browser.set_active_tags(["gov", "edu"]);

        assert_eq!(names(&browser.view()), vec!["Alpha", "Beta"]);

        browser.set_mode(TagMode::All);
        assert_eq!(names(&browser.view()), vec!["Beta"]);
        assert_eq!(browser.view().mode, TagMode::All);
    }

    #[test]
    fn test_select_toggle() {
        let mut browser = loaded_browser();
        let alpha = RecordId::new("alpha");
        let beta = RecordId::new("beta");

        assert_eq!(browser.select(&alpha).unwrap(), Some(&alpha));
        assert_eq!(browser.select(&beta).unwrap(), Some(&beta));
        assert_eq!(browser.select(&beta).unwrap(), None);
    }

    #[test]
    fn test_select_unknown_record() {
        let mut browser = loaded_browser();
        browser.select(&RecordId::new("alpha")).unwrap();

        let result = browser.select(&RecordId::new("missing"));
        assert!(matches!(result, Err(BrowserError::UnknownRecord(_))));
        assert_eq!(browser.selection(), Some(&RecordId::new("alpha")));
    }

    #[test]
    fn test_selected_record_hidden_by_filter() {
        let mut browser = loaded_browser();
        browser.select(&RecordId::new("gamma")).unwrap();

        let view = browser.view();
        assert_eq!(view.selected_record().map(|r| r.name.as_str()), Some("Gamma"));

        browser.toggle_tag("edu");
        let view = browser.view();
        assert!(view.is_selected(&RecordId::new("gamma")));
        assert!(view.selected_record().is_none());
    }

    #[test]
    fn test_handle_messages_in_order() {
        let mut browser = loaded_browser();

        let view = browser.handle(Message::ToggleTag("edu".to_string())).unwrap();
        assert_eq!(view.results(), 2);
        assert!(view.is_active("edu"));

        let view = browser.handle(Message::SetSearchQuery("alpha".to_string())).unwrap();
        assert_eq!(names(&view), vec!["Alpha"]);

        let view = browser.handle(Message::Select(RecordId::new("alpha"))).unwrap();
        assert!(view.is_selected(&RecordId::new("alpha")));

        let view = browser.handle(Message::SetActiveTags(vec!["blog".to_string()])).unwrap();
        assert!(view.records.is_empty());

        let view = browser.handle(Message::ClearFilters).unwrap();
        assert_eq!(view.results(), 3);

        let view = browser.handle(Message::SetMode(TagMode::All)).unwrap();
        assert_eq!(view.mode, TagMode::All);
    }

    #[test]
    fn test_handle_unknown_select_is_error() {
        let mut browser = loaded_browser();
        let result = browser.handle(Message::Select(RecordId::new("nope")));
        assert!(result.is_err());
    }

    #[test]
    fn test_available_tags_ignore_filters() {
        let mut browser = loaded_browser();
        browser.toggle_tag("blog");
        assert_eq!(browser.view().available_tags, vec!["edu", "gov", "blog"]);
    }
}

//! Filter state - the user's current tag and search criteria

/// Active tag filters plus the free-text search query
///
/// Tags are kept in the order they were activated so views render them
/// deterministically, but they are compared as a set: activating a tag twice
/// has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active_tags: Vec<String>,
    search_query: String,
}

impl FilterState {
    /// Create an empty filter state (everything passes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Active tags in activation order
    pub fn active_tags(&self) -> &[String] {
        &self.active_tags
    }

    /// Raw search query as entered
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Check whether `tag` is currently active
    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// Replace the active tag set
    ///
    /// Duplicates in the input are collapsed, keeping the first occurrence.
    pub fn set_active_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.is_active(&tag) {
                self.active_tags.push(tag);
            }
        }
    }

    /// Toggle a tag on or off
    ///
    /// Returns `true` if the tag is active after the call.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.active_tags.iter().position(|t| t == tag) {
            self.active_tags.remove(pos);
            false
        } else {
            self.active_tags.push(tag.to_string());
            true
        }
    }

    /// Drop active tags that `keep` rejects
    pub fn retain_tags<F>(&mut self, keep: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.active_tags.retain(keep);
    }

    /// Replace the search query
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        self.active_tags.clear();
        self.search_query.clear();
    }

    /// True when neither tags nor a non-blank query are set
    pub fn is_empty(&self) -> bool {
        self.active_tags.is_empty() && self.search_query.trim().is_empty()
    }
}

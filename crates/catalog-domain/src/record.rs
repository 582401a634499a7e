//! Record module - one entry in the use case catalog

use std::fmt;

/// Stable identifier for a catalog record
///
/// Taken from the source document's `id` field when present. Records without
/// one get an id derived from their load position (`usecase-<index>`), which
/// stays stable because the catalog is never reordered after load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create a RecordId from an explicit identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_domain::RecordId;
    ///
    /// let id = RecordId::new("course-site");
    /// assert_eq!(id.as_str(), "course-site");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Synthesize an id from a record's position in the catalog
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_domain::RecordId;
    ///
    /// assert_eq!(RecordId::from_index(3).as_str(), "usecase-3");
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self(format!("usecase-{}", index))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A use case record
///
/// Records are immutable once loaded. Missing source fields are normalized
/// by the loader: absent tags become an empty list, absent text becomes an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Stable identifier
    pub id: RecordId,

    /// Display name (the source calls this `name` or `title`)
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Tags in source order
    pub tags: Vec<String>,

    /// Optional preview image
    pub image_url: Option<String>,

    /// Optional link to a live demo
    pub demo_link: Option<String>,
}

impl Record {
    /// Create a record with the given id, name, description and tags
    ///
    /// Media fields start empty; use [`Record::with_image_url`] and
    /// [`Record::with_demo_link`] to attach them.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            tags,
            image_url: None,
            demo_link: None,
        }
    }

    /// Attach a preview image URL
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Attach a demo link
    pub fn with_demo_link(mut self, url: impl Into<String>) -> Self {
        self.demo_link = Some(url.into());
        self
    }

    /// Check whether the record carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_index() {
        assert_eq!(RecordId::from_index(0).as_str(), "usecase-0");
        assert_eq!(RecordId::from_index(12).to_string(), "usecase-12");
    }

    #[test]
    fn test_record_id_ordering() {
        let a = RecordId::new("a");
        let b = RecordId::new("b");
        assert!(a < b);
        assert_eq!(a, RecordId::from("a"));
    }

    #[test]
    fn test_has_tag_is_exact() {
        let record = Record::new(
            RecordId::new("r1"),
            "Course site",
            "A site for a course",
            vec!["Education".to_string(), "Blog".to_string()],
        );

        assert!(record.has_tag("Education"));
        assert!(!record.has_tag("education"));
        assert!(!record.has_tag("Edu"));
    }

    #[test]
    fn test_builder_media_fields() {
        let record = Record::new(RecordId::new("r1"), "A", "", vec![])
            .with_image_url("https://example.com/a.png")
            .with_demo_link("https://example.com/demo");

        assert_eq!(record.image_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(record.demo_link.as_deref(), Some("https://example.com/demo"));
    }
}

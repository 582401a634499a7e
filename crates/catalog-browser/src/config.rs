//! Configuration for the catalog browser
//!
//! Defines where the catalog comes from and how active tags combine.

use catalog_domain::TagMode;
use serde::{Deserialize, Serialize};

/// Default catalog location, relative to the working directory
pub const DEFAULT_DATA_SOURCE: &str = "data/use-case-data.json";

/// Configuration for the catalog browser
///
/// # Examples
///
/// ```
/// use catalog_browser::BrowserConfig;
/// use catalog_domain::TagMode;
///
/// let config = BrowserConfig::default();
/// assert_eq!(config.tag_mode, TagMode::Any);
///
/// let config = BrowserConfig::default().with_tag_mode(TagMode::All);
/// assert_eq!(config.tag_mode, TagMode::All);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// How several active tags combine
    /// Default: any (a record needs at least one active tag)
    #[serde(default, with = "tag_mode_serde")]
    pub tag_mode: TagMode,

    /// Catalog location: a file path or an http(s) URL
    /// Default: data/use-case-data.json
    #[serde(default = "default_data_source")]
    pub data_source: String,
}

fn default_data_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            tag_mode: TagMode::default(),
            data_source: default_data_source(),
        }
    }
}

impl BrowserConfig {
    /// Replace the tag mode
    pub fn with_tag_mode(mut self, tag_mode: TagMode) -> Self {
        self.tag_mode = tag_mode;
        self
    }

    /// Replace the data source
    pub fn with_data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = data_source.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.data_source.trim().is_empty() {
            return Err("data_source must not be empty".to_string());
        }
        Ok(())
    }
}

// TagMode lives in the dependency-free domain crate, so its serde form is
// defined here: the lowercase mode name.
mod tag_mode_serde {
    use catalog_domain::TagMode;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(mode: &TagMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(mode.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<TagMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TagMode::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid tag_mode '{}', expected 'any' or 'all'", value))
        })
    }
}

//! Tag mode module - how several active tags combine

/// Combination policy for multiple active tag filters
///
/// - Any: a record passes if it carries at least one active tag (logical OR)
/// - All: a record passes only if it carries every active tag (logical AND)
///
/// With a single active tag both modes select the same records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagMode {
    /// At least one active tag must be present
    #[default]
    Any,

    /// Every active tag must be present
    All,
}

impl TagMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TagMode::Any => "any",
            TagMode::All => "all",
        }
    }

    /// Parse a mode from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "any" | "or" => Some(TagMode::Any),
            "all" | "and" => Some(TagMode::All),
            _ => None,
        }
    }
}

impl std::str::FromStr for TagMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tag mode: {}", s))
    }
}

impl std::fmt::Display for TagMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

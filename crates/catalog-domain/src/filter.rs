//! Catalog filter engine
//!
//! Reduces a catalog to the records visible under the current tag filters and
//! search query. Two stages run per record and both must pass:
//!
//! 1. **Tag stage**: skipped when no tags are active; otherwise governed by
//!    [`TagMode`] (any active tag vs. every active tag).
//! 2. **Search stage**: skipped when the trimmed query is empty; otherwise the
//!    lower-cased query must be a substring of the lower-cased name,
//!    description, or one of the tags.
//!
//! Output keeps the catalog's relative order. Nothing here allocates new
//! records or mutates the input.

use crate::{FilterState, Record, TagMode};

/// Compute the visible subset of `records`
///
/// # Examples
///
/// ```
/// use catalog_domain::{filter, Record, RecordId, TagMode};
///
/// let records = vec![
///     Record::new(RecordId::new("a"), "Alpha", "", vec!["edu".into()]),
///     Record::new(RecordId::new("b"), "Beta", "", vec!["gov".into(), "edu".into()]),
/// ];
///
/// let visible = filter(&records, &["gov"], "", TagMode::Any);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].name, "Beta");
/// ```
pub fn filter<'a, S: AsRef<str>>(
    records: &'a [Record],
    active_tags: &[S],
    search_query: &str,
    mode: TagMode,
) -> Vec<&'a Record> {
    let query = search_query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| passes_tags(record, active_tags, mode))
        .filter(|record| query.is_empty() || matches_query(record, &query))
        .collect()
}

/// Compute the visible subset using a [`FilterState`]
pub fn filter_with<'a>(records: &'a [Record], state: &FilterState, mode: TagMode) -> Vec<&'a Record> {
    filter(records, state.active_tags(), state.search_query(), mode)
}

/// All distinct tags across `records`, in first-seen order
///
/// # Examples
///
/// ```
/// use catalog_domain::{available_tags, Record, RecordId};
///
/// let records = vec![
///     Record::new(RecordId::new("a"), "Alpha", "", vec!["edu".into()]),
///     Record::new(RecordId::new("b"), "Beta", "", vec!["gov".into(), "edu".into()]),
/// ];
///
/// assert_eq!(available_tags(&records), vec!["edu", "gov"]);
/// ```
pub fn available_tags(records: &[Record]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in records.iter().flat_map(|r| r.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Narrow a tag list by a case-insensitive substring
///
/// Used by the filter list's own search box. A blank term returns every tag.
pub fn search_tags<'a, S: AsRef<str>>(tags: &'a [S], term: &str) -> Vec<&'a str> {
    let term = term.trim().to_lowercase();
    tags.iter()
        .map(|tag| tag.as_ref())
        .filter(|tag| term.is_empty() || tag.to_lowercase().contains(&term))
        .collect()
}

fn passes_tags<S: AsRef<str>>(record: &Record, active_tags: &[S], mode: TagMode) -> bool {
    if active_tags.is_empty() {
        return true;
    }
    match mode {
        TagMode::Any => active_tags.iter().any(|tag| record.has_tag(tag.as_ref())),
        TagMode::All => active_tags.iter().all(|tag| record.has_tag(tag.as_ref())),
    }
}

// `query` is already trimmed and lower-cased
fn matches_query(record: &Record, query: &str) -> bool {
    record.name.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordId;

    const NO_TAGS: &[&str] = &[];

    fn record(id: &str, name: &str, description: &str, tags: &[&str]) -> Record {
        Record::new(
            RecordId::new(id),
            name,
            description,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn alpha_beta() -> Vec<Record> {
        vec![
            record("alpha", "Alpha", "", &["edu"]),
            record("beta", "Beta", "", &["gov", "edu"]),
        ]
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_scenario_tag_only() {
        let records = alpha_beta();
        let visible = filter(&records, &["gov"], "", TagMode::Any);
        assert_eq!(names(&visible), vec!["Beta"]);
    }

    #[test]
    fn test_scenario_search_only() {
        let records = alpha_beta();
        let visible = filter(&records, NO_TAGS, "alp", TagMode::Any);
        assert_eq!(names(&visible), vec!["Alpha"]);
    }

    #[test]
    fn test_scenario_tag_and_search() {
        let records = alpha_beta();
        for mode in [TagMode::Any, TagMode::All] {
            let visible = filter(&records, &["edu"], "bet", mode);
            assert_eq!(names(&visible), vec!["Beta"]);
        }
    }

    #[test]
    fn test_any_vs_all() {
        let records = vec![
            record("1", "One", "", &["a"]),
            record("2", "Two", "", &["a", "b"]),
            record("3", "Three", "", &["b"]),
            record("4", "Four", "", &["c"]),
        ];

        let any = filter(&records, &["a", "b"], "", TagMode::Any);
        assert_eq!(names(&any), vec!["One", "Two", "Three"]);

        let all = filter(&records, &["a", "b"], "", TagMode::All);
        assert_eq!(names(&all), vec!["Two"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let records = vec![
            record("1", "Course Website", "", &[]),
            record("2", "Portfolio", "Showcase your WORK", &[]),
            record("3", "Blog", "", &["Writing"]),
        ];

        assert_eq!(names(&filter(&records, NO_TAGS, "  COURSE ", TagMode::Any)), vec!["Course Website"]);
        assert_eq!(names(&filter(&records, NO_TAGS, "work", TagMode::Any)), vec!["Portfolio"]);
        assert_eq!(names(&filter(&records, NO_TAGS, "writ", TagMode::Any)), vec!["Blog"]);
    }

    #[test]
    fn test_whitespace_query_is_noop() {
        let records = alpha_beta();
        assert_eq!(filter(&records, NO_TAGS, " \t ", TagMode::Any).len(), 2);
    }

    #[test]
    fn test_empty_fields_never_match_query() {
        let records = vec![record("1", "", "", &[])];
        assert!(filter(&records, NO_TAGS, "x", TagMode::Any).is_empty());
        assert_eq!(filter(&records, NO_TAGS, "", TagMode::Any).len(), 1);
    }

    #[test]
    fn test_unknown_tag_yields_nothing() {
        let records = alpha_beta();
        assert!(filter(&records, &["missing"], "", TagMode::Any).is_empty());
        assert!(filter(&records, &["edu", "missing"], "", TagMode::All).is_empty());
    }

    #[test]
    fn test_filter_with_state() {
        let records = alpha_beta();
        let mut state = FilterState::new();
        state.toggle_tag("edu");
        state.set_search_query("ALPHA");

        let visible = filter_with(&records, &state, TagMode::All);
        assert_eq!(names(&visible), vec!["Alpha"]);
    }

    #[test]
    fn test_available_tags_first_seen_order() {
        let records = vec![
            record("1", "One", "", &["z", "a"]),
            record("2", "Two", "", &["a", "m"]),
            record("3", "Three", "", &[]),
        ];
        assert_eq!(available_tags(&records), vec!["z", "a", "m"]);
        assert!(available_tags(&[]).is_empty());
    }

    #[test]
    fn test_search_tags() {
        let tags = vec!["Education".to_string(), "Government".to_string(), "Blog".to_string()];

        assert_eq!(search_tags(&tags, "ED"), vec!["Education"]);
        assert_eq!(search_tags(&tags, "o"), vec!["Education", "Government", "Blog"]);
        assert_eq!(search_tags(&tags, ""), vec!["Education", "Government", "Blog"]);
        assert!(search_tags(&tags, "xyz").is_empty());
    }
}

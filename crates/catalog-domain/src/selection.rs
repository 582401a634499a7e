//! Single-select toggle
//!
//! Selection is keyed by [`RecordId`] rather than display name, so two records
//! that share a title never select each other.

use crate::RecordId;

/// Compute the next selection after the user picks `record`
///
/// Picking the selected record clears the selection; picking any other record
/// replaces it.
///
/// # Examples
///
/// ```
/// use catalog_domain::{select, RecordId};
///
/// let r1 = RecordId::new("r1");
/// let r2 = RecordId::new("r2");
///
/// assert_eq!(select(None, &r1), Some(r1.clone()));
/// assert_eq!(select(Some(&r1), &r1), None);
/// assert_eq!(select(Some(&r1), &r2), Some(r2.clone()));
/// ```
pub fn select(current: Option<&RecordId>, record: &RecordId) -> Option<RecordId> {
    match current {
        Some(selected) if selected == record => None,
        _ => Some(record.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_from_empty() {
        let r1 = RecordId::new("r1");
        assert_eq!(select(None, &r1), Some(r1));
    }

    #[test]
    fn test_select_same_deselects() {
        let r1 = RecordId::new("r1");
        assert_eq!(select(Some(&r1), &r1), None);
    }

    #[test]
    fn test_select_other_replaces() {
        let r1 = RecordId::new("r1");
        let r2 = RecordId::new("r2");
        assert_eq!(select(Some(&r1), &r2), Some(r2));
    }

    #[test]
    fn test_same_name_different_id_is_distinct() {
        // Two "Blog" records with different ids must not toggle each other
        let first = RecordId::from_index(0);
        let second = RecordId::from_index(1);
        assert_eq!(select(Some(&first), &second), Some(second.clone()));
    }
}

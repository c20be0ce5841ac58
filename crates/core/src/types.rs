//! Foundational types shared by every layer
//!
//! This module defines:
//! - `Entity`: the contract every stored record satisfies
//! - `SortKey`: the `(sort value, id)` projection that drives keyset pagination
//! - `Direction`: scan direction for ordered queries
//!
//! The sort-key projection is a compile-time trait method supplied by each
//! entity, not a dynamic field lookup: a sort field that is not a real,
//! comparable column cannot be expressed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Direction
// ============================================================================

/// Scan direction for ordered queries
///
/// Cursors are direction-specific: a cursor minted for a descending walk
/// must not be reused with `Direction::Asc`. The paginator does not detect
/// the mismatch; results are computed per the keyset formula as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Oldest first
    Asc,
    /// Newest first (default for forum listings)
    #[default]
    Desc,
}

impl Direction {
    /// True for descending scans
    pub fn is_descending(self) -> bool {
        matches!(self, Direction::Desc)
    }
}

// ============================================================================
// SortKey
// ============================================================================

/// The `(sort value, id)` pair that totally orders a collection
///
/// The sort value alone is not guaranteed unique (two records can share a
/// timestamp); the id tiebreaker makes the order strict and stable, which is
/// what guarantees no record is skipped or repeated across pages.
///
/// The derived `Ord` is lexicographic over `(value, id)` — exactly the
/// compound comparison keyset pagination needs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    /// The record's value for the designated sort field
    pub value: String,
    /// The record's unique id
    pub id: String,
}

impl SortKey {
    /// Create a new sort key
    pub fn new(value: impl Into<String>, id: impl Into<String>) -> Self {
        SortKey {
            value: value.into(),
            id: id.into(),
        }
    }
}

/// Render a timestamp as a sort value
///
/// RFC 3339 with fixed millisecond precision and a `Z` suffix, so lexical
/// order equals chronological order across all records.
pub fn sort_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Entity
// ============================================================================

/// Contract for any record that lives in a store collection
///
/// Invariants:
/// - `id` is unique within the collection
/// - `sort_key()` is present and comparable on every record that
///   participates in pagination
pub trait Entity: Clone + Send + Sync + 'static {
    /// Collection name in the record store
    const COLLECTION: &'static str;

    /// The record's unique id
    fn id(&self) -> &str;

    /// Projection onto the `(sort value, id)` pair used for ordering
    fn sort_key(&self) -> SortKey;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_direction_default_is_desc() {
        assert_eq!(Direction::default(), Direction::Desc);
        assert!(Direction::Desc.is_descending());
        assert!(!Direction::Asc.is_descending());
    }

    #[test]
    fn test_sort_key_ordering_by_value_first() {
        let a = SortKey::new("2024-01-01T00:00:00.000Z", "z");
        let b = SortKey::new("2024-01-02T00:00:00.000Z", "a");
        assert!(a < b);
    }

    #[test]
    fn test_sort_key_id_tiebreak() {
        let a = SortKey::new("2024-01-01T00:00:00.000Z", "a");
        let b = SortKey::new("2024-01-01T00:00:00.000Z", "b");
        assert!(a < b);
    }

    #[test]
    fn test_sort_timestamp_lexical_equals_chronological() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert!(sort_timestamp(early) < sort_timestamp(late));
    }

    #[test]
    fn test_sort_timestamp_fixed_precision() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        let rendered = sort_timestamp(ts);
        assert_eq!(rendered, "2024-06-15T12:30:45.000Z");
    }
}

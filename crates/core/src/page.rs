//! Page request and result types for cursor-based pagination
//!
//! These types define the interface contract every list-returning repository
//! method shares. The request carries an opaque cursor minted by a previous
//! page; the result carries the next cursor iff more results exist.

use crate::types::Direction;
use serde::{Deserialize, Serialize};

// ============================================================================
// PageRequest
// ============================================================================

/// A logical "page after cursor X, N records, direction D" request
///
/// # Examples
///
/// ```
/// use studyhall_core::page::PageRequest;
///
/// let req = PageRequest::newest_first().with_limit(10);
/// assert_eq!(req.limit, Some(10));
/// assert!(req.cursor.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Opaque cursor from the previous page, if resuming
    pub cursor: Option<String>,

    /// Requested page size; clamped to `[1, 100]`, default 20
    pub limit: Option<i64>,

    /// Scan direction
    #[serde(default)]
    pub direction: Direction,
}

impl PageRequest {
    /// First page, newest records first (the forum default)
    pub fn newest_first() -> Self {
        PageRequest {
            cursor: None,
            limit: None,
            direction: Direction::Desc,
        }
    }

    /// First page, oldest records first (conventional for post listings)
    pub fn oldest_first() -> Self {
        PageRequest {
            cursor: None,
            limit: None,
            direction: Direction::Asc,
        }
    }

    /// Builder: resume after an opaque cursor
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Builder: set requested page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: set scan direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of records plus continuation state
///
/// # Invariants
///
/// - `data.len() <=` the clamped limit
/// - `next_cursor` is present iff `has_more` is true
/// - `data` is strictly ordered by `(sort value, id)` per the direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<R> {
    /// Records in this page
    pub data: Vec<R>,

    /// Opaque cursor for the next page, present iff `has_more`
    pub next_cursor: Option<String>,

    /// True if more records exist past this page
    pub has_more: bool,
}

impl<R> Page<R> {
    /// An empty final page
    pub fn empty() -> Self {
        Page {
            data: vec![],
            next_cursor: None,
            has_more: false,
        }
    }

    /// Number of records in this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if this page carries no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

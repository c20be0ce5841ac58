//! Record store adapter for the forum data layer
//!
//! The upper layers treat storage as an external collaborator reachable
//! through the [`RecordStore`] trait: equality/comparison filtering, ordered
//! range scans with a limit, and single-row insert/update/delete. This crate
//! supplies that trait plus [`MemStore`], an in-memory reference adapter.
//!
//! Transactions, isolation levels, and persistence formats are the adapter's
//! own concern; nothing above this crate assumes more than the trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mem;

use studyhall_core::{Direction, Entity, Result};

/// Equality/comparison predicate over a record
pub type Filter<'a, R> = dyn Fn(&R) -> bool + Send + Sync + 'a;

/// Single-record mutation applied under the store's write lock
pub type Patch<R> = dyn Fn(&mut R) + Send + Sync;

/// Minimal query interface every storage backend exposes
///
/// Scans are ordered by the entity's `(sort value, id)` projection in the
/// requested direction; the store never interprets record contents beyond
/// that projection and the caller's predicate.
pub trait RecordStore<R: Entity>: Send + Sync {
    /// Filtered, ordered range scan returning at most `limit` records
    fn scan(&self, filter: &Filter<R>, direction: Direction, limit: usize) -> Result<Vec<R>>;

    /// Insert a record; duplicate ids are an invalid operation
    fn insert(&self, record: R) -> Result<R>;

    /// Fetch a record by id
    fn get(&self, id: &str) -> Result<Option<R>>;

    /// Apply a patch to a record by id, returning the updated record
    fn update_by_id(&self, id: &str, patch: &Patch<R>) -> Result<R>;

    /// Delete a record by id; returns whether it existed
    fn delete_by_id(&self, id: &str) -> Result<bool>;

    /// Count records matching a predicate
    fn count(&self, filter: &Filter<R>) -> Result<usize>;
}

pub use mem::{MemCollection, MemStore};

//! Query engine for the forum data layer: cursor codec + keyset paginator
//!
//! Every list-returning repository method goes through [`paginate`], which
//! implements cursor-based keyset pagination over a [`RecordStore`]: no
//! OFFSET scans, stateless client-held cursors, and a strict
//! `(sort value, id)` order that never skips or repeats records.
//!
//! [`RecordStore`]: studyhall_store::RecordStore

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod paginate;

pub use cursor::Cursor;
pub use paginate::paginate;

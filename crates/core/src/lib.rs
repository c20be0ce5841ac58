//! Core types for the studyhall forum data layer
//!
//! This crate defines:
//! - Entity models (courses, threads, posts, notifications, AI answers, materials)
//! - The `Entity` trait with the `(sort value, id)` pagination projection
//! - Page request/result contracts shared by every list-returning method
//! - The error taxonomy (`CursorError` is the only client-side error)
//! - Numeric policy (page-size clamping, snippet lengths)
//!
//! Everything here is pure data: no store access, no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod error;
pub mod limits;
pub mod page;
pub mod types;

pub use entities::{
    AiAnswer, Citation, Course, Material, Notification, NotificationKind, Post, Thread,
    ThreadStatus,
};
pub use error::{CursorError, Error, Result};
pub use page::{Page, PageRequest};
pub use types::{sort_timestamp, Direction, Entity, SortKey};

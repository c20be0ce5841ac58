//! Repository facades for the forum data layer
//!
//! One thin, constructor-injected repository per entity type, each composing
//! the keyset paginator and (for materials) the relevance scorer with a
//! [`RecordStore`] collection. Result shapes pass through unchanged: list
//! methods return `Page<_>`, search returns ranked `ScoredResult`s.
//!
//! The [`Forum`] handle wires every repository over one shared store and
//! hosts the cross-repository flows (reply side effects, AI answer
//! attachment, endorsements).
//!
//! [`RecordStore`]: studyhall_store::RecordStore

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ai_answers;
pub mod courses;
pub mod forum;
pub mod materials;
pub mod notifications;
pub mod posts;
pub mod threads;

pub use ai_answers::AiAnswerRepo;
pub use courses::CourseRepo;
pub use forum::Forum;
pub use materials::{MaterialRepo, SearchQuery};
pub use notifications::NotificationRepo;
pub use posts::PostRepo;
pub use threads::ThreadRepo;

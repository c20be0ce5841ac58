//! Studyhall — discussion-forum data layer for a course Q&A product
//!
//! Threads, posts, courses, notifications, AI answers, and course materials
//! live behind repository facades that provide CRUD plus two query
//! capabilities:
//!
//! - **Keyset pagination**: every list method pages on the last-seen
//!   `(sort value, id)` pair through an opaque client-held cursor — correct
//!   and efficient as result sets grow, no OFFSET scans, no server-side
//!   pagination state.
//! - **Keyword-relevance search**: materials are scored 0..100 by keyword
//!   overlap against the query, with highlighted snippets.
//!
//! # Quick Start
//!
//! ```
//! use studyhall::{Forum, PageRequest, SearchQuery, Thread};
//!
//! let forum = Forum::in_memory();
//! forum.threads().create(Thread::new("course-1", "user-1", "Title", "Body"))?;
//!
//! let page = forum
//!     .threads()
//!     .list_by_course("course-1", &PageRequest::newest_first().with_limit(20))?;
//! assert_eq!(page.len(), 1);
//!
//! let hits = forum.materials().search(&SearchQuery::new("binary search tree"))?;
//! assert!(hits.is_empty());
//! # Ok::<(), studyhall::Error>(())
//! ```
//!
//! # Architecture
//!
//! The storage engine is an external collaborator behind the
//! [`RecordStore`] trait; [`MemStore`] is the in-memory reference adapter.
//! The paginator, cursor codec, keyword extractor, and scorer are pure,
//! synchronous, request-scoped functions — any replica can serve any
//! request.

pub use studyhall_core::{
    limits, sort_timestamp, AiAnswer, Citation, Course, CursorError, Direction, Entity, Error,
    Material, Notification, NotificationKind, Page, PageRequest, Post, Result, SortKey, Thread,
    ThreadStatus,
};
pub use studyhall_query::{paginate, Cursor};
pub use studyhall_repos::{
    AiAnswerRepo, CourseRepo, Forum, MaterialRepo, NotificationRepo, PostRepo, SearchQuery,
    ThreadRepo,
};
pub use studyhall_search::{extract, rank, score, ScoredResult, SearchDocument, SearchOptions};
pub use studyhall_store::{MemCollection, MemStore, RecordStore};

//! Entity models for the course Q&A forum
//!
//! Every entity carries a unique string `id` and a `created_at` timestamp;
//! the timestamp (rendered through [`sort_timestamp`]) is the designated
//! sort field for pagination, with the id as tiebreaker.
//!
//! Wire shapes use camelCase to match the product's JSON conventions.

use crate::types::{sort_timestamp, Entity, SortKey};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Course
// ============================================================================

/// A course whose forum this data layer serves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique id
    pub id: String,
    /// Short course code, e.g. "CS201"
    pub code: String,
    /// Display title
    pub title: String,
    /// Academic term, e.g. "Fall 2025"
    pub term: String,
    /// Enrolled student count
    pub enrollment_count: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create a course with a fresh id and the current timestamp
    pub fn new(code: impl Into<String>, title: impl Into<String>, term: impl Into<String>) -> Self {
        Course {
            id: new_id(),
            code: code.into(),
            title: title.into(),
            term: term.into(),
            enrollment_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Builder: override the generated id (tests, imports)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set enrollment count
    pub fn with_enrollment(mut self, count: u32) -> Self {
        self.enrollment_count = count;
        self
    }
}

impl Entity for Course {
    const COLLECTION: &'static str = "courses";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::new(sort_timestamp(self.created_at), self.id.clone())
    }
}

// ============================================================================
// Thread
// ============================================================================

/// Lifecycle state of a question thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    /// No answer yet
    #[default]
    Open,
    /// Has at least one reply or an AI answer
    Answered,
    /// Explicitly marked resolved by the asker or an instructor
    Resolved,
}

/// A question thread in a course forum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Unique id
    pub id: String,
    /// Owning course
    pub course_id: String,
    /// Asking user
    pub author_id: String,
    /// Question title
    pub title: String,
    /// Question body
    pub body: String,
    /// Lifecycle state
    pub status: ThreadStatus,
    /// View counter, bumped by `record_view`
    pub view_count: u32,
    /// True once an AI answer is attached
    pub has_ai_answer: bool,
    /// Creation timestamp (the pagination sort field)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Thread {
    /// Create an open thread with a fresh id and the current timestamp
    pub fn new(
        course_id: impl Into<String>,
        author_id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Thread {
            id: new_id(),
            course_id: course_id.into(),
            author_id: author_id.into(),
            title: title.into(),
            body: body.into(),
            status: ThreadStatus::Open,
            view_count: 0,
            has_ai_answer: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: override the generated id (tests, imports)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: override the creation timestamp (tests, imports)
    pub fn with_created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = ts;
        self.updated_at = ts;
        self
    }
}

impl Entity for Thread {
    const COLLECTION: &'static str = "threads";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::new(sort_timestamp(self.created_at), self.id.clone())
    }
}

// ============================================================================
// Post
// ============================================================================

/// A reply inside a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique id
    pub id: String,
    /// Owning thread
    pub thread_id: String,
    /// Replying user
    pub author_id: String,
    /// Reply body
    pub body: String,
    /// True once endorsed by an instructor
    pub endorsed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post with a fresh id and the current timestamp
    pub fn new(
        thread_id: impl Into<String>,
        author_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Post {
            id: new_id(),
            thread_id: thread_id.into(),
            author_id: author_id.into(),
            body: body.into(),
            endorsed: false,
            created_at: Utc::now(),
        }
    }

    /// Builder: override the generated id (tests, imports)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: override the creation timestamp (tests, imports)
    pub fn with_created_at(mut self, ts: DateTime<Utc>) -> Self {
        self.created_at = ts;
        self
    }
}

impl Entity for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::new(sort_timestamp(self.created_at), self.id.clone())
    }
}

// ============================================================================
// Notification
// ============================================================================

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    /// Someone replied in a thread you follow
    Reply,
    /// Your post was endorsed
    Endorsement,
    /// An AI answer landed on your thread
    AiAnswer,
    /// Thread status changed (answered/resolved)
    StatusChange,
}

/// An in-product notification for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique id
    pub id: String,
    /// Receiving user
    pub user_id: String,
    /// Thread the notification points at
    pub thread_id: String,
    /// Notification kind
    pub kind: NotificationKind,
    /// Read state
    pub read: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create an unread notification with a fresh id and the current timestamp
    pub fn new(
        user_id: impl Into<String>,
        thread_id: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Notification {
            id: new_id(),
            user_id: user_id.into(),
            thread_id: thread_id.into(),
            kind,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Builder: override the generated id (tests, imports)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Entity for Notification {
    const COLLECTION: &'static str = "notifications";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::new(sort_timestamp(self.created_at), self.id.clone())
    }
}

// ============================================================================
// AiAnswer
// ============================================================================

/// A course-material citation attached to an AI answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Cited material
    pub material_id: String,
    /// Citation relevance (0..=100)
    pub relevance: u8,
}

/// A generated answer attached to a thread
///
/// Instructor endorsement is gated: it requires `confidence_score >= 80`
/// and at least two citations with `relevance >= 80`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnswer {
    /// Unique id
    pub id: String,
    /// Thread this answer belongs to (at most one answer per thread)
    pub thread_id: String,
    /// Answer body
    pub body: String,
    /// Generation confidence (0..=100)
    pub confidence_score: u8,
    /// Material citations backing the answer
    pub citations: Vec<Citation>,
    /// Student endorsement counter
    pub student_endorsements: u32,
    /// True once endorsed by an instructor
    pub instructor_endorsed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl AiAnswer {
    /// Create an answer with a fresh id and the current timestamp
    pub fn new(thread_id: impl Into<String>, body: impl Into<String>, confidence_score: u8) -> Self {
        AiAnswer {
            id: new_id(),
            thread_id: thread_id.into(),
            body: body.into(),
            confidence_score,
            citations: vec![],
            student_endorsements: 0,
            instructor_endorsed: false,
            created_at: Utc::now(),
        }
    }

    /// Builder: override the generated id (tests, imports)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set citations
    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }

    /// True if this answer passes the instructor-endorsement gate
    pub fn endorsable(&self) -> bool {
        let quality_citations = self.citations.iter().filter(|c| c.relevance >= 80).count();
        self.confidence_score >= 80 && quality_citations >= 2
    }
}

impl Entity for AiAnswer {
    const COLLECTION: &'static str = "ai_answers";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::new(sort_timestamp(self.created_at), self.id.clone())
    }
}

// ============================================================================
// Material
// ============================================================================

/// A free-text course material (lecture notes, handouts) that search runs over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Unique id
    pub id: String,
    /// Owning course
    pub course_id: String,
    /// Material title
    pub title: String,
    /// Full text content
    pub content: String,
    /// Material kind, e.g. "lecture", "handout", "assignment"
    pub kind: String,
    /// Index-time keyword set; extracted from title+content when absent
    pub keywords: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Material {
    /// Create a material with a fresh id and the current timestamp
    ///
    /// Keywords start empty; the materials repository extracts them on
    /// insert when the caller supplies none.
    pub fn new(
        course_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Material {
            id: new_id(),
            course_id: course_id.into(),
            title: title.into(),
            content: content.into(),
            kind: "document".to_string(),
            keywords: vec![],
            created_at: Utc::now(),
        }
    }

    /// Builder: override the generated id (tests, imports)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder: set the material kind
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builder: set index-time keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

impl Entity for Material {
    const COLLECTION: &'static str = "materials";

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> SortKey {
        SortKey::new(sort_timestamp(self.created_at), self.id.clone())
    }
}

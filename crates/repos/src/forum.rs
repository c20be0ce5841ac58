//! Top-level forum handle
//!
//! `Forum` constructs every repository over one shared in-memory store and
//! hosts the cross-repository flows: posting a reply touches the thread's
//! status and notifies its author, attaching an AI answer flags the thread,
//! endorsing a post notifies the post's author. Repositories themselves stay
//! single-collection; there are no multi-row transactional guarantees here,
//! only ordered single-row writes.

use crate::{
    AiAnswerRepo, CourseRepo, MaterialRepo, NotificationRepo, PostRepo, ThreadRepo,
};
use std::sync::Arc;
use studyhall_core::{
    AiAnswer, Course, Material, Notification, NotificationKind, Post, Result, Thread, ThreadStatus,
};
use studyhall_store::MemStore;
use tracing::debug;

/// Handle over the whole forum data layer
///
/// Stateless beyond the repositories it holds; cheap to clone, safe to share
/// across threads, no session affinity required.
#[derive(Clone)]
pub struct Forum {
    threads: ThreadRepo,
    posts: PostRepo,
    courses: CourseRepo,
    notifications: NotificationRepo,
    ai_answers: AiAnswerRepo,
    materials: MaterialRepo,
}

impl Forum {
    /// Open a forum over a fresh in-memory store
    pub fn in_memory() -> Self {
        let store = MemStore::new();
        Forum {
            threads: ThreadRepo::new(Arc::new(store.collection::<Thread>())),
            posts: PostRepo::new(Arc::new(store.collection::<Post>())),
            courses: CourseRepo::new(Arc::new(store.collection::<Course>())),
            notifications: NotificationRepo::new(Arc::new(store.collection::<Notification>())),
            ai_answers: AiAnswerRepo::new(Arc::new(store.collection::<AiAnswer>())),
            materials: MaterialRepo::new(Arc::new(store.collection::<Material>())),
        }
    }

    /// Thread repository
    pub fn threads(&self) -> &ThreadRepo {
        &self.threads
    }

    /// Post repository
    pub fn posts(&self) -> &PostRepo {
        &self.posts
    }

    /// Course repository
    pub fn courses(&self) -> &CourseRepo {
        &self.courses
    }

    /// Notification repository
    pub fn notifications(&self) -> &NotificationRepo {
        &self.notifications
    }

    /// AI answer repository
    pub fn ai_answers(&self) -> &AiAnswerRepo {
        &self.ai_answers
    }

    /// Material repository
    pub fn materials(&self) -> &MaterialRepo {
        &self.materials
    }

    // ========================================================================
    // Cross-repository flows
    // ========================================================================

    /// Post a reply into a thread
    ///
    /// An open thread becomes answered, and the thread's author is notified
    /// unless they wrote the reply themselves.
    pub fn post_reply(&self, post: Post) -> Result<Post> {
        let thread = self.threads.get_required(&post.thread_id)?;
        let created = self.posts.create(post)?;

        if thread.status == ThreadStatus::Open {
            self.threads
                .set_status(&thread.id, ThreadStatus::Answered)?;
        }
        if thread.author_id != created.author_id {
            self.notifications.create(Notification::new(
                &thread.author_id,
                &thread.id,
                NotificationKind::Reply,
            ))?;
        }
        debug!(target: "studyhall::forum", thread = %thread.id, post = %created.id, "reply posted");
        Ok(created)
    }

    /// Attach a generated answer to a thread
    ///
    /// Flags the thread (`has_ai_answer`, open threads become answered) and
    /// notifies the asker.
    pub fn attach_ai_answer(&self, answer: AiAnswer) -> Result<AiAnswer> {
        let thread = self.threads.get_required(&answer.thread_id)?;
        let created = self.ai_answers.create(answer)?;
        self.threads.mark_ai_answered(&thread.id)?;
        self.notifications.create(Notification::new(
            &thread.author_id,
            &thread.id,
            NotificationKind::AiAnswer,
        ))?;
        Ok(created)
    }

    /// Endorse a post and notify its author
    pub fn endorse_post(&self, post_id: &str) -> Result<Post> {
        let endorsed = self.posts.set_endorsed(post_id, true)?;
        self.notifications.create(Notification::new(
            &endorsed.author_id,
            &endorsed.thread_id,
            NotificationKind::Endorsement,
        ))?;
        Ok(endorsed)
    }

    /// Mark a thread resolved and notify its author
    pub fn resolve_thread(&self, thread_id: &str) -> Result<Thread> {
        let resolved = self.threads.set_status(thread_id, ThreadStatus::Resolved)?;
        self.notifications.create(Notification::new(
            &resolved.author_id,
            &resolved.id,
            NotificationKind::StatusChange,
        ))?;
        Ok(resolved)
    }
}

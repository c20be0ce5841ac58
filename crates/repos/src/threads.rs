//! Thread repository

use chrono::Utc;
use std::sync::Arc;
use studyhall_core::{Error, Page, PageRequest, Result, Thread, ThreadStatus};
use studyhall_query::paginate;
use studyhall_store::RecordStore;
use tracing::debug;

/// Repository for question threads
///
/// Stateless handle over the thread collection; all state lives in the
/// store. Cheap to clone.
#[derive(Clone)]
pub struct ThreadRepo {
    store: Arc<dyn RecordStore<Thread>>,
}

impl ThreadRepo {
    /// Create a repository over a thread collection
    pub fn new(store: Arc<dyn RecordStore<Thread>>) -> Self {
        ThreadRepo { store }
    }

    /// Insert a new thread
    pub fn create(&self, thread: Thread) -> Result<Thread> {
        self.store.insert(thread)
    }

    /// Fetch a thread by id
    pub fn get(&self, id: &str) -> Result<Option<Thread>> {
        self.store.get(id)
    }

    /// Fetch a thread by id, failing if absent
    pub fn get_required(&self, id: &str) -> Result<Thread> {
        self.get(id)?.ok_or_else(|| Error::NotFound {
            collection: "threads",
            id: id.to_string(),
        })
    }

    /// Page through one course's threads
    pub fn list_by_course(&self, course_id: &str, request: &PageRequest) -> Result<Page<Thread>> {
        paginate(
            self.store.as_ref(),
            &|t: &Thread| t.course_id == course_id,
            request,
        )
    }

    /// Page through threads across all courses
    pub fn list_recent(&self, request: &PageRequest) -> Result<Page<Thread>> {
        paginate(self.store.as_ref(), &|_: &Thread| true, request)
    }

    /// Page through one course's threads in a given status
    pub fn list_by_status(
        &self,
        course_id: &str,
        status: ThreadStatus,
        request: &PageRequest,
    ) -> Result<Page<Thread>> {
        paginate(
            self.store.as_ref(),
            &|t: &Thread| t.course_id == course_id && t.status == status,
            request,
        )
    }

    /// Bump a thread's view counter
    pub fn record_view(&self, id: &str) -> Result<Thread> {
        self.store.update_by_id(id, &|t: &mut Thread| {
            t.view_count = t.view_count.saturating_add(1);
        })
    }

    /// Set a thread's lifecycle status
    pub fn set_status(&self, id: &str, status: ThreadStatus) -> Result<Thread> {
        let updated = self.store.update_by_id(id, &move |t: &mut Thread| {
            t.status = status;
            t.updated_at = Utc::now();
        })?;
        debug!(target: "studyhall::repos", thread = %id, status = ?status, "thread status changed");
        Ok(updated)
    }

    /// Mark that an AI answer is attached; an open thread becomes answered
    pub fn mark_ai_answered(&self, id: &str) -> Result<Thread> {
        self.store.update_by_id(id, &|t: &mut Thread| {
            t.has_ai_answer = true;
            if t.status == ThreadStatus::Open {
                t.status = ThreadStatus::Answered;
            }
            t.updated_at = Utc::now();
        })
    }

    /// Delete a thread; returns whether it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(id)
    }
}

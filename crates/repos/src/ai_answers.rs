//! AI answer repository

use std::sync::Arc;
use studyhall_core::{AiAnswer, Direction, Error, Result};
use studyhall_store::RecordStore;
use tracing::debug;

/// Repository for generated answers
///
/// A thread carries at most one AI answer; `create` enforces that.
#[derive(Clone)]
pub struct AiAnswerRepo {
    store: Arc<dyn RecordStore<AiAnswer>>,
}

impl AiAnswerRepo {
    /// Create a repository over an AI-answer collection
    pub fn new(store: Arc<dyn RecordStore<AiAnswer>>) -> Self {
        AiAnswerRepo { store }
    }

    /// Insert a new answer; a thread may hold only one
    pub fn create(&self, answer: AiAnswer) -> Result<AiAnswer> {
        if self.get_by_thread(&answer.thread_id)?.is_some() {
            return Err(Error::InvalidOperation(format!(
                "thread {} already has an AI answer",
                answer.thread_id
            )));
        }
        self.store.insert(answer)
    }

    /// Fetch an answer by id
    pub fn get(&self, id: &str) -> Result<Option<AiAnswer>> {
        self.store.get(id)
    }

    /// Fetch the answer attached to a thread, if any
    pub fn get_by_thread(&self, thread_id: &str) -> Result<Option<AiAnswer>> {
        let mut found = self.store.scan(
            &|a: &AiAnswer| a.thread_id == thread_id,
            Direction::Desc,
            1,
        )?;
        Ok(found.pop())
    }

    /// Bump an answer's student endorsement counter
    pub fn add_student_endorsement(&self, id: &str) -> Result<AiAnswer> {
        self.store.update_by_id(id, &|a: &mut AiAnswer| {
            a.student_endorsements = a.student_endorsements.saturating_add(1);
        })
    }

    /// Instructor-endorse an answer
    ///
    /// Gated on answer quality: confidence at least 80 and at least two
    /// citations with relevance at least 80. Fails with `InvalidOperation`
    /// when the gate is not met.
    pub fn set_instructor_endorsed(&self, id: &str) -> Result<AiAnswer> {
        let answer = self.get(id)?.ok_or_else(|| Error::NotFound {
            collection: "ai_answers",
            id: id.to_string(),
        })?;
        if !answer.endorsable() {
            return Err(Error::InvalidOperation(format!(
                "answer {id} does not meet the endorsement gate"
            )));
        }
        let endorsed = self
            .store
            .update_by_id(id, &|a: &mut AiAnswer| a.instructor_endorsed = true)?;
        debug!(target: "studyhall::repos", answer = %id, "AI answer instructor-endorsed");
        Ok(endorsed)
    }

    /// Delete the answer attached to a thread; returns whether one existed
    pub fn delete_by_thread(&self, thread_id: &str) -> Result<bool> {
        match self.get_by_thread(thread_id)? {
            Some(answer) => self.store.delete_by_id(&answer.id),
            None => Ok(false),
        }
    }
}

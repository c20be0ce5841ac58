//! Course repository

use std::sync::Arc;
use studyhall_core::{Course, Error, Page, PageRequest, Result};
use studyhall_query::paginate;
use studyhall_store::RecordStore;

/// Repository for courses
#[derive(Clone)]
pub struct CourseRepo {
    store: Arc<dyn RecordStore<Course>>,
}

impl CourseRepo {
    /// Create a repository over a course collection
    pub fn new(store: Arc<dyn RecordStore<Course>>) -> Self {
        CourseRepo { store }
    }

    /// Insert a new course
    pub fn create(&self, course: Course) -> Result<Course> {
        self.store.insert(course)
    }

    /// Fetch a course by id
    pub fn get(&self, id: &str) -> Result<Option<Course>> {
        self.store.get(id)
    }

    /// Fetch a course by id, failing if absent
    pub fn get_required(&self, id: &str) -> Result<Course> {
        self.get(id)?.ok_or_else(|| Error::NotFound {
            collection: "courses",
            id: id.to_string(),
        })
    }

    /// Page through all courses
    pub fn list(&self, request: &PageRequest) -> Result<Page<Course>> {
        paginate(self.store.as_ref(), &|_: &Course| true, request)
    }

    /// Update a course's enrollment count
    pub fn set_enrollment(&self, id: &str, count: u32) -> Result<Course> {
        self.store
            .update_by_id(id, &move |c: &mut Course| c.enrollment_count = count)
    }

    /// Delete a course; returns whether it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(id)
    }
}

//! Post repository

use std::sync::Arc;
use studyhall_core::{Error, Page, PageRequest, Post, Result};
use studyhall_query::paginate;
use studyhall_store::RecordStore;

/// Repository for thread replies
#[derive(Clone)]
pub struct PostRepo {
    store: Arc<dyn RecordStore<Post>>,
}

impl PostRepo {
    /// Create a repository over a post collection
    pub fn new(store: Arc<dyn RecordStore<Post>>) -> Self {
        PostRepo { store }
    }

    /// Insert a new post
    pub fn create(&self, post: Post) -> Result<Post> {
        self.store.insert(post)
    }

    /// Fetch a post by id
    pub fn get(&self, id: &str) -> Result<Option<Post>> {
        self.store.get(id)
    }

    /// Fetch a post by id, failing if absent
    pub fn get_required(&self, id: &str) -> Result<Post> {
        self.get(id)?.ok_or_else(|| Error::NotFound {
            collection: "posts",
            id: id.to_string(),
        })
    }

    /// Page through one thread's posts
    ///
    /// Reply listings conventionally read oldest-first; pass
    /// `PageRequest::oldest_first()` for that order.
    pub fn list_by_thread(&self, thread_id: &str, request: &PageRequest) -> Result<Page<Post>> {
        paginate(
            self.store.as_ref(),
            &|p: &Post| p.thread_id == thread_id,
            request,
        )
    }

    /// Number of replies in a thread
    pub fn count_by_thread(&self, thread_id: &str) -> Result<usize> {
        self.store.count(&|p: &Post| p.thread_id == thread_id)
    }

    /// Set a post's endorsement flag
    pub fn set_endorsed(&self, id: &str, endorsed: bool) -> Result<Post> {
        self.store
            .update_by_id(id, &move |p: &mut Post| p.endorsed = endorsed)
    }

    /// Delete a post; returns whether it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(id)
    }
}

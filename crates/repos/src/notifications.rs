//! Notification repository

use std::sync::Arc;
use studyhall_core::{Direction, Entity, Notification, Page, PageRequest, Result};
use studyhall_query::paginate;
use studyhall_store::RecordStore;

/// Repository for user notifications
#[derive(Clone)]
pub struct NotificationRepo {
    store: Arc<dyn RecordStore<Notification>>,
}

impl NotificationRepo {
    /// Create a repository over a notification collection
    pub fn new(store: Arc<dyn RecordStore<Notification>>) -> Self {
        NotificationRepo { store }
    }

    /// Insert a new notification
    pub fn create(&self, notification: Notification) -> Result<Notification> {
        self.store.insert(notification)
    }

    /// Page through one user's notifications
    pub fn list_for_user(&self, user_id: &str, request: &PageRequest) -> Result<Page<Notification>> {
        paginate(
            self.store.as_ref(),
            &|n: &Notification| n.user_id == user_id,
            request,
        )
    }

    /// Number of unread notifications for a user
    pub fn unread_count(&self, user_id: &str) -> Result<usize> {
        self.store
            .count(&|n: &Notification| n.user_id == user_id && !n.read)
    }

    /// Mark one notification read
    pub fn mark_read(&self, id: &str) -> Result<Notification> {
        self.store
            .update_by_id(id, &|n: &mut Notification| n.read = true)
    }

    /// Mark all of a user's notifications read; returns how many changed
    pub fn mark_all_read(&self, user_id: &str) -> Result<usize> {
        let unread = self.store.scan(
            &|n: &Notification| n.user_id == user_id && !n.read,
            Direction::Asc,
            usize::MAX,
        )?;
        for notification in &unread {
            self.store
                .update_by_id(notification.id(), &|n: &mut Notification| n.read = true)?;
        }
        Ok(unread.len())
    }

    /// Delete a notification; returns whether it existed
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete_by_id(id)
    }
}

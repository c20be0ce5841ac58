//! In-memory record store adapter
//!
//! `MemStore` holds one `MemCollection<R>` per entity type, each a
//! `parking_lot::RwLock<HashMap<String, R>>`. Collection handles are cheap
//! `Clone`s sharing the same map, so every repository facade stays a
//! stateless handle (no module-level singletons).
//!
//! Scans collect, filter, sort by the entity's `(sort value, id)` projection,
//! and truncate to the limit. Adequate for the reference adapter; a real
//! backend would push the predicate and order into its own index.

use crate::{Filter, Patch, RecordStore};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use studyhall_core::{Direction, Entity, Error, Result};
use tracing::debug;

// ============================================================================
// MemCollection
// ============================================================================

/// One entity type's records, keyed by id
///
/// Thread-safe and cheap to clone; all clones share the same map.
#[derive(Debug, Default)]
pub struct MemCollection<R> {
    records: Arc<RwLock<HashMap<String, R>>>,
}

impl<R> Clone for MemCollection<R> {
    fn clone(&self) -> Self {
        MemCollection {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: Entity> MemCollection<R> {
    /// Create an empty collection
    pub fn new() -> Self {
        MemCollection {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True if the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<R: Entity> RecordStore<R> for MemCollection<R> {
    fn scan(&self, filter: &Filter<R>, direction: Direction, limit: usize) -> Result<Vec<R>> {
        let records = self.records.read();
        let mut matched: Vec<R> = records.values().filter(|r| filter(r)).cloned().collect();
        drop(records);

        matched.sort_by(|a, b| {
            let ord = a.sort_key().cmp(&b.sort_key());
            if direction.is_descending() {
                ord.reverse()
            } else {
                ord
            }
        });
        matched.truncate(limit);
        Ok(matched)
    }

    fn insert(&self, record: R) -> Result<R> {
        let mut records = self.records.write();
        let id = record.id().to_string();
        if records.contains_key(&id) {
            return Err(Error::InvalidOperation(format!(
                "duplicate id {id} in {}",
                R::COLLECTION
            )));
        }
        records.insert(id.clone(), record.clone());
        debug!(target: "studyhall::store", collection = R::COLLECTION, id = %id, "record inserted");
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<Option<R>> {
        Ok(self.records.read().get(id).cloned())
    }

    fn update_by_id(&self, id: &str, patch: &Patch<R>) -> Result<R> {
        let mut records = self.records.write();
        let record = records.get_mut(id).ok_or_else(|| Error::NotFound {
            collection: R::COLLECTION,
            id: id.to_string(),
        })?;
        patch(record);
        debug!(target: "studyhall::store", collection = R::COLLECTION, id = %id, "record updated");
        Ok(record.clone())
    }

    fn delete_by_id(&self, id: &str) -> Result<bool> {
        let existed = self.records.write().remove(id).is_some();
        if existed {
            debug!(target: "studyhall::store", collection = R::COLLECTION, id = %id, "record deleted");
        }
        Ok(existed)
    }

    fn count(&self, filter: &Filter<R>) -> Result<usize> {
        Ok(self.records.read().values().filter(|r| filter(r)).count())
    }
}

// ============================================================================
// MemStore
// ============================================================================

/// Container of per-entity collections
///
/// Hands out typed [`MemCollection`] handles; the first request for an
/// entity type creates its collection.
#[derive(Default)]
pub struct MemStore {
    collections: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        MemStore {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Get (or create) the collection for an entity type
    pub fn collection<R: Entity>(&self) -> MemCollection<R> {
        let mut collections = self.collections.write();
        let entry = collections
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(MemCollection::<R>::new()));
        entry
            .downcast_ref::<MemCollection<R>>()
            .expect("collection registered under its entity's TypeId")
            .clone()
    }
}

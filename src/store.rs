//! # In-Process Entity Store
//!
//! This module provides the owned, in-memory store that backs mock mode. It
//! holds one collection per catalog, each a mapping from numeric id to a JSON
//! record. A store is constructed explicitly (empty or seeded with the
//! fixture dataset) and injected into services; nothing here is global.
//!
//! ## Id allocation
//!
//! Each collection carries a monotonic id counter seeded at one past the
//! highest existing id. Deleting a record never rewinds the counter, so a
//! deleted id is not reassigned to a later create.
//!
//! ## Mutation serialization
//!
//! Each collection is guarded by an async mutex that is held across the
//! simulated latency and the mutation itself, so two overlapping mutating
//! calls on the same catalog cannot interleave and silently drop one
//! another's effect.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::{AuditEntry, AuditLog, AuditOperation, CatalogKind, NameIndex, ServiceError, fixtures};

struct Collection {
    records: BTreeMap<i64, Value>,
    next_id: i64,
}

impl Collection {
    fn empty() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn seeded(records: Vec<Value>) -> Self {
        let records: BTreeMap<i64, Value> = records
            .into_iter()
            .filter_map(|record| {
                let id = record.get("id")?.as_i64()?;
                Some((id, record))
            })
            .collect();
        let next_id = records.keys().next_back().copied().unwrap_or(0) + 1;
        Self { records, next_id }
    }
}

/// In-memory store with one collection per catalog.
pub struct CatalogStore {
    collections: [Mutex<Collection>; CatalogKind::ALL.len()],
    latency: Duration,
    audit: Option<AuditLog>,
}

impl CatalogStore {
    /// Creates a store with every collection empty.
    pub fn new() -> Self {
        Self {
            collections: CatalogKind::ALL.map(|_| Mutex::new(Collection::empty())),
            latency: Duration::ZERO,
            audit: None,
        }
    }

    /// Creates a store seeded with the fixture dataset.
    pub fn seeded() -> Self {
        Self {
            collections: CatalogKind::ALL.map(|kind| Mutex::new(Collection::seeded(fixtures::records(kind)))),
            latency: Duration::ZERO,
            audit: None,
        }
    }

    /// Sets the simulated latency awaited by every operation.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Attaches an audit log that records every mutation.
    pub fn with_audit(mut self, audit: AuditLog) -> Self {
        self.audit = Some(audit);
        self
    }

    fn collection(&self, kind: CatalogKind) -> &Mutex<Collection> {
        &self.collections[kind.index()]
    }

    fn record_audit(&self, operation: AuditOperation, success: bool) {
        if let Some(audit) = &self.audit {
            audit.append_or_warn(&AuditEntry::new(operation, success));
        }
    }

    /// Returns every record in `kind`, in ascending id order.
    pub async fn list(&self, kind: CatalogKind) -> Vec<Value> {
        let collection = self.collection(kind).lock().await;
        tokio::time::sleep(self.latency).await;
        collection.records.values().cloned().collect()
    }

    /// Returns the record with `id`, or `NotFound`.
    pub async fn get(&self, kind: CatalogKind, id: i64) -> Result<Value, ServiceError> {
        let collection = self.collection(kind).lock().await;
        tokio::time::sleep(self.latency).await;
        collection.records.get(&id).cloned().ok_or(ServiceError::NotFound)
    }

    /// Stores `record` under a freshly allocated id and returns it with the
    /// id set. Any id submitted in the draft is overwritten.
    pub async fn insert(&self, kind: CatalogKind, mut record: Value) -> Value {
        let mut collection = self.collection(kind).lock().await;
        tokio::time::sleep(self.latency).await;
        let id = collection.next_id;
        collection.next_id += 1;
        if let Some(map) = record.as_object_mut() {
            map.insert("id".to_string(), Value::from(id));
        }
        collection.records.insert(id, record.clone());
        drop(collection);
        self.record_audit(AuditOperation::Create { catalog: kind, id }, true);
        record
    }

    /// Replaces the record at `id` wholesale, preserving the id. Fails with
    /// `NotFound` when the id is absent, leaving the collection unchanged.
    pub async fn replace(&self, kind: CatalogKind, id: i64, mut record: Value) -> Result<Value, ServiceError> {
        let mut collection = self.collection(kind).lock().await;
        tokio::time::sleep(self.latency).await;
        if !collection.records.contains_key(&id) {
            drop(collection);
            self.record_audit(AuditOperation::Update { catalog: kind, id }, false);
            return Err(ServiceError::NotFound);
        }
        if let Some(map) = record.as_object_mut() {
            map.insert("id".to_string(), Value::from(id));
        }
        collection.records.insert(id, record.clone());
        drop(collection);
        self.record_audit(AuditOperation::Update { catalog: kind, id }, true);
        Ok(record)
    }

    /// Removes the record at `id`. Fails with `NotFound` when absent.
    pub async fn remove(&self, kind: CatalogKind, id: i64) -> Result<(), ServiceError> {
        let mut collection = self.collection(kind).lock().await;
        tokio::time::sleep(self.latency).await;
        let removed = collection.records.remove(&id).is_some();
        drop(collection);
        self.record_audit(AuditOperation::Delete { catalog: kind, id }, removed);
        if removed { Ok(()) } else { Err(ServiceError::NotFound) }
    }

    /// Builds the id-to-nombre index for `kind`, used by enrichment.
    pub async fn name_index(&self, kind: CatalogKind) -> NameIndex {
        let collection = self.collection(kind).lock().await;
        collection
            .records
            .iter()
            .filter_map(|(id, record)| Some((*id, record.get("nombre")?.as_str()?.to_string())))
            .collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

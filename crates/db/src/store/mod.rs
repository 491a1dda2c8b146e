//! The record store seam.
//!
//! Handlers depend on `dyn RecordStore`, so the production MongoDB store
//! and the in-memory test store are interchangeable.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::models::record::{NewRecord, Record, RecordPatch};

/// CRUD operations over the records collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, in store order.
    async fn list_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Insert a record and return its store-assigned id.
    ///
    /// The store performs no field validation; callers own the contract.
    async fn insert(&self, fields: NewRecord) -> Result<ObjectId, StoreError>;

    /// Overwrite the mutable fields of the record with the given id.
    ///
    /// Returns the number of matched records (0 or 1); the caller maps
    /// 0 to its own not-found semantics.
    async fn update_by_id(&self, id: ObjectId, fields: RecordPatch) -> Result<u64, StoreError>;

    /// Delete the first record whose `field` equals `value`, in store
    /// order. Returns the number of deleted records (0 or 1).
    async fn delete_first_by_field(&self, field: &str, value: &str) -> Result<u64, StoreError>;

    /// Connectivity probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}

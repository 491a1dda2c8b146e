//! In-memory record store.
//!
//! The test double behind the [`RecordStore`] seam: integration tests of
//! dependent crates run against it instead of a live MongoDB. Matches the
//! observable semantics of [`MongoStore`](crate::store::MongoStore): ids
//! are assigned on insert, updates match at most one record, deletes
//! remove the first match in insertion order.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::models::record::{NewRecord, Record, RecordPatch};
use crate::store::RecordStore;

/// [`RecordStore`] backed by a `Vec` behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with the given records.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

/// Value of a record field addressed by its document key.
///
/// Unknown keys match nothing, mirroring a filter on a field no document
/// carries.
fn field_value(record: &Record, field: &str) -> Option<String> {
    match field {
        "_id" => Some(record.id_hex()),
        "name" => Some(record.name.clone()),
        "email" => Some(record.email.clone()),
        "phone" => Some(record.phone.clone()),
        _ => None,
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }

    async fn insert(&self, fields: NewRecord) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(Record {
            id: Some(id),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        });
        Ok(id)
    }

    async fn update_by_id(&self, id: ObjectId, fields: RecordPatch) -> Result<u64, StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);

        match records.iter_mut().find(|r| r.id == Some(id)) {
            Some(record) => {
                record.name = fields.name;
                record.email = fields.email;
                record.phone = fields.phone;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_first_by_field(&self, field: &str, value: &str) -> Result<u64, StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);

        match records
            .iter()
            .position(|r| field_value(r, field).as_deref() == Some(value))
        {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

//! Production record store backed by a MongoDB collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::error::StoreError;
use crate::models::record::{NewRecord, Record, RecordPatch};
use crate::store::RecordStore;
use crate::DB_COLLECTION;

/// [`RecordStore`] over the records collection of a MongoDB database.
///
/// Holds no state of its own beyond the driver handles; the driver pools
/// and serializes connections internally.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<Record>,
}

impl MongoStore {
    /// Wrap the records collection of the given database.
    pub fn new(database: Database) -> Self {
        let collection = database.collection::<Record>(DB_COLLECTION);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, fields: NewRecord) -> Result<ObjectId, StoreError> {
        // Assign the id here rather than reading it back from the insert
        // result; the driver would generate one client-side anyway.
        let id = ObjectId::new();
        let record = Record {
            id: Some(id),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        };

        self.collection.insert_one(record).await?;
        Ok(id)
    }

    async fn update_by_id(&self, id: ObjectId, fields: RecordPatch) -> Result<u64, StoreError> {
        let update = doc! {
            "$set": {
                "name": fields.name,
                "email": fields.email,
                "phone": fields.phone,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_first_by_field(&self, field: &str, value: &str) -> Result<u64, StoreError> {
        let mut filter = Document::new();
        filter.insert(field, value);

        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

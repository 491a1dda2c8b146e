//! The record document and its write payloads.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A document from the records collection.
///
/// `_id` is assigned by the store on insert and immutable afterwards;
/// the application treats every other field as an opaque string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Record {
    /// Hex form of the id, or the empty string if unassigned.
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// Insert payload. The store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Replacement values for an update. The id is never part of the patch.
#[derive(Debug, Clone, Serialize)]
pub struct RecordPatch {
    pub name: String,
    pub email: String,
    pub phone: String,
}

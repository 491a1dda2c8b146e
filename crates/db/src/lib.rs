//! Record store: MongoDB bootstrap, document models, and the
//! [`store::RecordStore`] seam the web crate is built against.
//!
//! The database coordinates are fixed constants; only the HTTP side of
//! the application is environment-configurable.

pub mod error;
pub mod models;
pub mod store;

use mongodb::{Client, Database};

pub use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;

/// MongoDB server URL.
pub const DB_URL: &str = "mongodb://localhost:27017";

/// Name of the application database.
pub const DB_NAME: &str = "rolodex";

/// Name of the collection holding the records.
pub const DB_COLLECTION: &str = "records";

/// Connect to MongoDB and return a handle to the application database.
pub async fn connect() -> Result<Database, StoreError> {
    let client = Client::with_uri_str(DB_URL).await?;
    tracing::debug!(url = DB_URL, database = DB_NAME, "MongoDB client initialized");
    Ok(client.database(DB_NAME))
}

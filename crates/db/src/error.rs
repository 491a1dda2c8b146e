/// Errors surfaced by the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The MongoDB driver reported a failure (connection loss, server
    /// error, serialization problem).
    #[error("Database error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

use std::sync::Arc;

use rolodex_db::store::RecordStore;

use crate::config::ServerConfig;
use crate::views::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every field is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The record store. Injected at construction so tests can
    /// substitute an in-memory fake for MongoDB.
    pub store: Arc<dyn RecordStore>,
    /// Compiled view templates.
    pub templates: Arc<Templates>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

pub mod health;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree: the health check plus the record
/// pages, all mounted at the site root.
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(health::router()).merge(records::router())
}

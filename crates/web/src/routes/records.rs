//! Route definitions for the record CRUD pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Record page routes mounted at the site root.
///
/// ```text
/// GET  /                    -> index
/// GET  /read-a-db-record    -> read_records
/// GET  /create-a-db-record  -> create_form
/// POST /create-a-db-record  -> create_record
/// GET  /update-a-db-record  -> update_form
/// POST /update-a-db-record  -> update_record
/// GET  /delete-a-db-record  -> delete_form
/// POST /delete-a-db-record  -> delete_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::index))
        .route("/read-a-db-record", get(records::read_records))
        .route(
            "/create-a-db-record",
            get(records::create_form).post(records::create_record),
        )
        .route(
            "/update-a-db-record",
            get(records::update_form).post(records::update_record),
        )
        .route(
            "/delete-a-db-record",
            get(records::delete_form).post(records::delete_record),
        )
}

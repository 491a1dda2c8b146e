//! Handlers for the record CRUD pages.
//!
//! Each handler is a stateless request/response transform: parse and
//! validate the payload at the boundary, call the record store, render a
//! view or redirect back to the listing.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use rolodex_core::error::CoreError;
use rolodex_db::models::record::Record;
use rolodex_db::ObjectId;
use serde::Serialize;
use tera::Context;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::FormOrJson;
use crate::forms::{CreateRecordForm, DeleteRecordForm, UpdateRecordForm};
use crate::state::AppState;
use crate::views;

/// Mutating routes redirect here on success.
const READ_ROUTE: &str = "/read-a-db-record";

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// A record as the templates see it: the ObjectId flattened to hex.
#[derive(Debug, Serialize)]
struct RecordView {
    id: String,
    name: String,
    email: String,
    phone: String,
}

impl From<Record> for RecordView {
    fn from(record: Record) -> Self {
        Self {
            id: record.id_hex(),
            name: record.name,
            email: record.email,
            phone: record.phone,
        }
    }
}

/// Fetch all records and build the template context for a listing page.
async fn listing_context(state: &AppState) -> AppResult<Context> {
    let records: Vec<RecordView> = state
        .store
        .list_all()
        .await?
        .into_iter()
        .map(RecordView::from)
        .collect();

    let mut context = Context::new();
    context.insert("records", &records);
    Ok(context)
}

// ---------------------------------------------------------------------------
// Listing pages
// ---------------------------------------------------------------------------

/// GET /
///
/// Landing page.
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let html = state.templates.render(views::INDEX, &Context::new())?;
    Ok(Html(html))
}

/// GET /read-a-db-record
///
/// Render all records as a table.
pub async fn read_records(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let context = listing_context(&state).await?;
    tracing::info!("Record listing requested");

    let html = state.templates.render(views::READ, &context)?;
    Ok(Html(html))
}

/// GET /create-a-db-record
///
/// Render the empty creation form.
pub async fn create_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let html = state.templates.render(views::CREATE, &Context::new())?;
    Ok(Html(html))
}

/// GET /update-a-db-record
///
/// Render all records plus the edit form.
pub async fn update_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let context = listing_context(&state).await?;
    let html = state.templates.render(views::UPDATE, &context)?;
    Ok(Html(html))
}

/// GET /delete-a-db-record
///
/// Render all records plus the delete form.
pub async fn delete_form(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let context = listing_context(&state).await?;
    let html = state.templates.render(views::DELETE, &context)?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /create-a-db-record
///
/// Insert a record and redirect to the listing.
pub async fn create_record(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<CreateRecordForm>,
) -> AppResult<impl IntoResponse> {
    form.validate()?;

    let id = state.store.insert(form.into_new_record()).await?;
    tracing::info!(id = %id, "Record created");

    Ok(Redirect::to(READ_ROUTE))
}

/// POST /update-a-db-record
///
/// Overwrite the named fields of the record with the submitted id, then
/// redirect to the listing. The id itself is immutable.
pub async fn update_record(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<UpdateRecordForm>,
) -> AppResult<impl IntoResponse> {
    form.validate()?;

    let raw_id = form.id.clone().unwrap_or_default();
    let id = ObjectId::parse_str(&raw_id).map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "id '{raw_id}' is not a valid record identifier"
        )))
    })?;

    let matched = state.store.update_by_id(id, form.into_patch()).await?;
    if matched == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            key: raw_id,
        }));
    }

    tracing::info!(id = %id, "Record updated");
    Ok(Redirect::to(READ_ROUTE))
}

/// POST /delete-a-db-record
///
/// Delete the first record matching the submitted name, then redirect to
/// the listing.
pub async fn delete_record(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<DeleteRecordForm>,
) -> AppResult<impl IntoResponse> {
    form.validate()?;

    let name = form.name.unwrap_or_default();
    // Deletion is keyed on `name` to preserve the page contract; the
    // store call itself is field-generic.
    let deleted = state.store.delete_first_by_field("name", &name).await?;
    if deleted == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            key: name,
        }));
    }

    tracing::info!(name = %name, "Record deleted");
    Ok(Redirect::to(READ_ROUTE))
}

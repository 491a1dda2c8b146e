use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rolodex_core::error::CoreError;
use rolodex_db::error::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`], so every route surfaces failures through
/// one status-code mapping; no route logs and drops the response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `rolodex-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store error from the database driver.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A template failed to render (missing template or context mismatch).
    #[error("Template error: {0}")]
    Render(#[from] tera::Error),

    /// A request payload failed boundary validation.
    #[error("Validation failed")]
    Invalid(#[from] validator::ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found: {key}"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Record store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Render errors ---
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template rendering error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Boundary validation ---
            AppError::Invalid(errors) => {
                let mut fields: Vec<String> =
                    errors.field_errors().keys().map(|k| k.to_string()).collect();
                fields.sort_unstable();
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Missing or empty required fields: {}", fields.join(", ")),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

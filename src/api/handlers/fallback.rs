//! Handler for unknown routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unmatched paths with a `not_found` error body.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

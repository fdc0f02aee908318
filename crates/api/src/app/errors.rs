use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catalog_core::CatalogError;

/// Uniform JSON error body: `{"error": <code>, "message": <text>}`.
pub fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a domain error onto the HTTP surface.
///
/// An absent version token is "precondition required"; a token that is
/// present but unusable, and a lost revision race, are both failed
/// preconditions.
pub fn catalog_error_to_response(err: CatalogError) -> Response {
    match err {
        CatalogError::TokenMissing => json_error(
            StatusCode::PRECONDITION_REQUIRED,
            "token_missing",
            "If-Match header with a version token is required",
        ),
        CatalogError::TokenMalformed { raw } => json_error(
            StatusCode::PRECONDITION_FAILED,
            "token_malformed",
            format!("malformed version token: {raw:?}"),
        ),
        CatalogError::RevisionConflict { expected } => json_error(
            StatusCode::PRECONDITION_FAILED,
            "revision_conflict",
            format!("version token {expected} does not match the stored product"),
        ),
        CatalogError::NotFound { what } => json_error(StatusCode::NOT_FOUND, "not_found", what),
        CatalogError::ValidationFailed { violations } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "validation_failed",
                "message": "one or more fields are invalid",
                "violations": violations,
            })),
        )
            .into_response(),
        // An identifier that does not parse cannot name a stored product.
        CatalogError::InvalidId(message) => {
            json_error(StatusCode::NOT_FOUND, "not_found", message)
        }
        CatalogError::DirectoryUnavailable { reason } => {
            json_error(StatusCode::BAD_GATEWAY, "directory_unavailable", reason)
        }
        CatalogError::Internal(message) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
        }
    }
}

use crate::errors::AppError;
use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub code: &'static str,
    pub error: &'static str,
}

/// Map a domain error to its HTTP status and wire envelope.
/// The `error` strings are part of the API contract; clients match on them.
pub fn map_error(err: &AppError) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        AppError::InvalidAction(_) => (StatusCode::BAD_REQUEST, "invalid_action", "Invalid action"),
        AppError::IllegalTransition(_) => (
            StatusCode::BAD_REQUEST,
            "invalid_transition",
            "Invalid state transition",
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "storage_unavailable",
            "Storage unavailable",
        ),
    };

    (
        status,
        Json(ErrorEnvelope {
            ok: false,
            code,
            error: message,
        }),
    )
}

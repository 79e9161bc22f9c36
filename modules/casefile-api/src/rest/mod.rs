pub mod case;
pub mod chat;

use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

/// `{ "error": ... }` with a status, the shape both routes use for failures.
pub(crate) fn error_response(
    status: StatusCode,
    message: &str,
) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "error": message })))
}

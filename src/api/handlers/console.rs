use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// `GET <console prefix>/status`: liveness probe on the excluded console
/// scope. No token filter, no policy; keep it free of anything sensitive.
pub async fn status() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

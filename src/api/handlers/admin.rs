use axum::Json;
use serde_json::{Value, json};

use crate::api::extractors::AuthCtxExtractor;

/// `GET /admin/reports`: admin-only sample resource behind the
/// `/admin/**` rule.
pub async fn reports(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<Value> {
    Json(json!({
        "requested_by": ctx.username(),
        "reports": ["daily-signins", "failed-authentications"],
    }))
}

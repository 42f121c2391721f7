use axum::Json;

use crate::api::dto::profile::ProfileResponse;
use crate::api::extractors::AuthCtxExtractor;

/// `GET /profile`: echo the authenticated caller back at them.
pub async fn profile(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        username: ctx.username().to_string(),
        roles: ctx.roles().to_vec(),
    })
}

//! Access enforcement: the allow/deny gate behind the token filter.
//!
//! Reads whatever principal the token filter attached (possibly none), asks
//! the policy for a decision on the request path, and turns denials into the
//! crate-wide 401/403 JSON responses.

use axum::{
    body::Body,
    extract::{OriginalUri, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::policy::{Decision, DenyReason};
use crate::state::AppState;

pub async fn enforce(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let principal = req.extensions().get::<AuthCtx>().map(AuthCtx::principal);

    match state.policy.decide(uri.path(), principal) {
        Decision::Allow => Ok(next.run(req).await),
        Decision::Deny(DenyReason::Unauthenticated) => Err(AppError::Unauthorized),
        Decision::Deny(DenyReason::Forbidden) => {
            tracing::warn!(
                path = %uri.path(),
                user = principal.map(|p| p.username.as_str()).unwrap_or("-"),
                "insufficient role"
            );
            Err(AppError::Forbidden)
        }
    }
}

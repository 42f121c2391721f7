//! Bearer-token filter: identify the caller, never reject them.
//!
//! Runs before access enforcement on every secured route. A valid token puts
//! an `AuthCtx` into the request extensions; a missing, malformed or expired
//! token leaves the request unauthenticated and lets it continue. Rejection
//! is the access middleware's decision. That separation is what keeps
//! `/authenticate` reachable for callers who have no usable token yet.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::state::AppState;

pub async fn attach_principal(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&req) {
        match state.tokens.verify(token) {
            Ok(principal) => {
                req.extensions_mut().insert(AuthCtx::new(principal));
            }
            Err(err) => {
                // Indistinguishable from "no token" further down the chain.
                tracing::debug!(error = %err, "bearer token rejected; continuing unauthenticated");
            }
        }
    }

    next.run(req).await
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

//! `POST /authenticate`: trade credentials for a bearer token.
//!
//! The only place the credential store is consulted. Unknown user, disabled
//! account and wrong password all collapse into the same generic 401 so the
//! response cannot be used as a username oracle.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::authenticate::{AuthRequest, AuthResponse};
use crate::error::AppError;
use crate::services::auth::Principal;
use crate::state::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| {
            tracing::debug!(user = %req.username, "authentication failed: unknown user");
            AppError::Unauthorized
        })?;

    if !user.enabled {
        tracing::debug!(user = %user.username, "authentication failed: account disabled");
        return Err(AppError::Unauthorized);
    }

    if !state.passwords.matches(&req.password, &user.password) {
        tracing::debug!(user = %user.username, "authentication failed: bad credentials");
        return Err(AppError::Unauthorized);
    }

    let principal = Principal::new(user.username, user.roles);
    let issued = state.tokens.issue(&principal).map_err(|err| {
        tracing::error!(error = %err, "failed to issue access token");
        AppError::Internal
    })?;

    tracing::info!(user = %principal.username, "authenticated; access token issued");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            access_token: issued.access_token,
            token_type: issued.token_type.to_string(),
            expires_in: issued.expires_in,
        }),
    ))
}

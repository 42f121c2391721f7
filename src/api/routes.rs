//! URL structure and filter-chain wiring.
//!
//! Two scopes:
//! - the secured scope: every route (and the fallback) sits behind
//!   token filter -> access policy, in that order;
//! - the console scope, nested under `Config::console_path_prefix`, which is
//!   deliberately mounted OUTSIDE both layers: requests there are never
//!   token-checked and never policy-evaluated.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::handlers;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware::{access, cors, http, token_filter};
use crate::state::AppState;

pub fn build_router(state: AppState, config: &Config) -> Router {
    // Layers run outermost-first: the filter added last wraps the ones
    // before it, so `token_filter` sees the request before `access`.
    let secured = Router::new()
        .route("/authenticate", post(handlers::authenticate::authenticate))
        .route("/profile", get(handlers::profile::profile))
        .route("/admin/reports", get(handlers::admin::reports))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), access::enforce))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            token_filter::attach_principal,
        ))
        .with_state(state);

    // The console scope keeps its own fallback so that even unmatched paths
    // under the prefix stay outside the filter chain.
    let console = Router::new()
        .route("/status", get(handlers::console::status))
        .fallback(fallback);

    let router = Router::new()
        .nest(&config.console_path_prefix, console)
        .merge(secured);

    let router = cors::apply(router, config);
    http::apply(router, config)
}

// Unmatched paths still flow through the filter chain, so an anonymous probe
// of an unknown URL gets 401 before it can learn whether the URL exists.
async fn fallback() -> AppError {
    AppError::NotFound
}

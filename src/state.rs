use std::sync::Arc;

use crate::repos::credential_store::CredentialStore;
use crate::services::auth::{PasswordEncoder, TokenService};
use crate::services::policy::AccessPolicy;

/// Shared per-process context handed to the router. Clone is cheap; every
/// field is an `Arc`. No request-scoped state lives here.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn CredentialStore>,
    pub passwords: Arc<dyn PasswordEncoder>,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(
        tokens: Arc<TokenService>,
        users: Arc<dyn CredentialStore>,
        passwords: Arc<dyn PasswordEncoder>,
        policy: Arc<AccessPolicy>,
    ) -> Self {
        Self {
            tokens,
            users,
            passwords,
            policy,
        }
    }
}

use crate::services::auth::Principal;

/// The identity attached to an authenticated request.
///
/// The token filter verifies the bearer token, builds the `Principal` from
/// its claims and stores this in the request extensions; handlers receive it
/// through `AuthCtxExtractor` and never see the raw token.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    principal: Principal,
}

impl AuthCtx {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn username(&self) -> &str {
        &self.principal.username
    }

    pub fn roles(&self) -> &[String] {
        &self.principal.roles
    }
}

//! Username -> stored credentials + roles lookup.
//!
//! Only the `/authenticate` flow reads this store. Per-request token
//! verification authenticates from the token's own claims and never comes
//! back here, so the store sees one query pair per login, not per request.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;

/// A user account as the credential store persists it.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub username: String,
    /// Stored secret representation; its format is the password encoder's
    /// business (plain string or PHC hash).
    pub password: String,
    pub roles: Vec<String>,
    pub enabled: bool,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<StoredUser>>;
}

/// Postgres-backed store over the classic `users` / `authorities` pair of
/// tables, keyed by username.
#[derive(Clone, Debug)]
pub struct PgCredentialStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct UserRow {
    username: String,
    password: String,
    enabled: bool,
}

#[derive(Debug, FromRow)]
struct AuthorityRow {
    authority: String,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<StoredUser>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, password, enabled
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let authorities = sqlx::query_as::<_, AuthorityRow>(
            r#"
            SELECT authority
            FROM authorities
            WHERE username = $1
            "#,
        )
        .bind(&user.username)
        .fetch_all(&self.pool)
        .await?;

        // Legacy rows carry a "ROLE_" storage prefix; policy roles are the
        // bare names.
        let roles = authorities
            .into_iter()
            .map(|row| match row.authority.strip_prefix("ROLE_") {
                Some(bare) => bare.to_string(),
                None => row.authority,
            })
            .collect();

        Ok(Some(StoredUser {
            username: user.username,
            password: user.password,
            roles,
            enabled: user.enabled,
        }))
    }
}

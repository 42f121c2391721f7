use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::{Config, PasswordEncoderKind};
use crate::repos::credential_store::PgCredentialStore;
use crate::services::auth::{Argon2Encoder, PasswordEncoder, PlainTextEncoder, TokenService};
use crate::services::policy::AccessPolicy;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,auth_gateway=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched).
        tracing::error!(?info, "panic");

        // In development, fail fast: crash the whole process so we notice
        // immediately. In production, prefer the default behavior.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting auth gateway in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = api::build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let tokens = TokenService::new(
        &config.access_jwt_private_key_pem,
        &config.access_jwt_public_key_pem,
        config.auth_issuer.clone(),
        config.auth_audience.clone(),
        config.access_token_ttl_seconds,
        config.access_token_leeway_seconds,
    )
    .context("failed to build token service")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    let users = PgCredentialStore::new(pool);

    let passwords: Arc<dyn PasswordEncoder> = match config.password_encoder {
        PasswordEncoderKind::Plain => {
            tracing::warn!(
                "PASSWORD_ENCODER=plain: stored passwords are compared in clear text"
            );
            Arc::new(PlainTextEncoder)
        }
        PasswordEncoderKind::Argon2 => Arc::new(Argon2Encoder),
    };

    Ok(AppState::new(
        Arc::new(tokens),
        Arc::new(users),
        passwords,
        Arc::new(AccessPolicy::standard()),
    ))
}

use std::net::SocketAddr;
use std::str::FromStr;
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Which secret-comparison strategy `/authenticate` uses.
///
/// `Plain` compares the supplied password and the stored value as equal
/// strings. It exists to mirror deployments that store unhashed secrets and
/// must never survive into production; `Argon2` verifies PHC-format hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordEncoderKind {
    Plain,
    Argon2,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub database_url: String,

    pub auth_issuer: String,
    pub auth_audience: String,
    // Signs newly issued access tokens (Ed25519 PKCS#8 PEM).
    pub access_jwt_private_key_pem: String,
    // Verifies inbound bearer tokens (Ed25519 SPKI PEM).
    pub access_jwt_public_key_pem: String,
    pub access_token_ttl_seconds: u64,
    pub access_token_leeway_seconds: u64,

    pub password_encoder: PasswordEncoderKind,

    // Requests under this prefix bypass the token filter and the access
    // policy entirely.
    pub console_path_prefix: String,

    pub cors_allowed_origins: Vec<String>,
    pub request_timeout_seconds: u64,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let auth_issuer = env::var("AUTH_ISSUER").map_err(|_| ConfigError::Missing("AUTH_ISSUER"))?;
        let auth_audience =
            env::var("AUTH_AUDIENCE").map_err(|_| ConfigError::Missing("AUTH_AUDIENCE"))?;

        let access_jwt_private_key_pem = env::var("ACCESS_JWT_PRIVATE_KEY_PEM")
            .map_err(|_| ConfigError::Missing("ACCESS_JWT_PRIVATE_KEY_PEM"))?
            .replace("\\n", "\n");
        let access_jwt_public_key_pem = env::var("ACCESS_JWT_PUBLIC_KEY_PEM")
            .map_err(|_| ConfigError::Missing("ACCESS_JWT_PUBLIC_KEY_PEM"))?
            .replace("\\n", "\n");

        let access_token_ttl_seconds = env::var("ACCESS_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(600); // 10 min
        let access_token_leeway_seconds = env::var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        let password_encoder = match env::var("PASSWORD_ENCODER")
            .unwrap_or_else(|_| "plain".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "plain" | "noop" => PasswordEncoderKind::Plain,
            "argon2" => PasswordEncoderKind::Argon2,
            _ => return Err(ConfigError::Invalid("PASSWORD_ENCODER")),
        };

        let console_path_prefix =
            env::var("CONSOLE_PATH_PREFIX").unwrap_or_else(|_| "/console".to_string());
        // Must be a non-root prefix; nesting "/" would swallow every route.
        if !console_path_prefix.starts_with('/')
            || console_path_prefix == "/"
            || console_path_prefix.ends_with('/')
        {
            return Err(ConfigError::Invalid("CONSOLE_PATH_PREFIX"));
        }

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let request_body_limit_bytes = env::var("REQUEST_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64 * 1024);

        Ok(Config {
            addr,
            app_env,
            database_url,
            auth_issuer,
            auth_audience,
            access_jwt_private_key_pem,
            access_jwt_public_key_pem,
            access_token_ttl_seconds,
            access_token_leeway_seconds,
            password_encoder,
            console_path_prefix,
            cors_allowed_origins,
            request_timeout_seconds,
            request_body_limit_bytes,
        })
    }
}

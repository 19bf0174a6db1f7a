use crate::shared::pagination::DEFAULT_PAGE_SIZE;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub page_size: i64,
    pub database: DatabaseSettings,
    pub oauth2: OAuth2Settings,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

/// Where to find the provider's token verification key and which claims
/// to require.
#[derive(Debug, Clone)]
pub struct OAuth2Settings {
    pub public_key_path: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let public_key_path = env::var("OAUTH2_PUBLIC_KEY_PATH")
            .map_err(|_| anyhow::anyhow!("OAUTH2_PUBLIC_KEY_PATH must be set"))?;

        Ok(Self {
            port: env_or("PORT", 8000),
            page_size: env_or("PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1),
            database: DatabaseSettings::with_url(database_url),
            oauth2: OAuth2Settings {
                public_key_path,
                issuer: env::var("OAUTH2_ISSUER").ok().filter(|s| !s.is_empty()),
                audience: env::var("OAUTH2_AUDIENCE").ok().filter(|s| !s.is_empty()),
            },
        })
    }
}

impl DatabaseSettings {
    /// Pool tuning comes from `DB_*` variables, falling back to defaults.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: env_or("DB_MAX_CONNECTIONS", 20),
            min_connections: env_or("DB_MIN_CONNECTIONS", 5),
            acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 3)),
            idle_timeout: Duration::from_secs(env_or("DB_IDLE_TIMEOUT_SECS", 600)),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has an invalid value {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

use chrono::Duration;
use std::env;
use thiserror::Error;

pub const MIN_SECRET_BYTES: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub auth: AuthConfig,
}

/// Credential settings. Loaded once before serving and never changed.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub token_ttl: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T::Err: std::fmt::Display,
    {
        match env::var(key) {
            Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid { key, reason: e.to_string() }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let db_url = Self::get_env("DATABASE_URL")?;
        let secret = Self::get_env("AUTH_SECRET")?;
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Invalid {
                key: "AUTH_SECRET",
                reason: format!("must be at least {MIN_SECRET_BYTES} bytes"),
            });
        }

        let ttl_secs: i64 = Self::get_env_or("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid { key: "TOKEN_TTL_SECS", reason: "must be positive".into() });
        }

        Ok(EnvConfig {
            port: Self::get_env_or("PORT", 8080)?,
            db_url,
            auth: AuthConfig { secret, token_ttl: Duration::seconds(ttl_secs) },
        })
    }
}

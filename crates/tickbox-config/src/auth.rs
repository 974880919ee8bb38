use std::env;

use thiserror::Error;

/// Shortest accepted `SESSION_SECRET`, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

const DEFAULT_COOKIE_NAME: &str = "tickbox_session";
const DEFAULT_COOKIE_PATH: &str = "/";
// Mirrors bcrypt::DEFAULT_COST without pulling bcrypt into this crate.
const DEFAULT_HASH_COST: u32 = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SESSION_SECRET must be set")]
    MissingSecret,

    #[error("SESSION_SECRET must be at least 32 bytes, got {0}")]
    SecretTooShort(usize),

    #[error("PASSWORD_HASH_COST must be between 4 and 31, got {0}")]
    InvalidHashCost(u32),
}

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub cookie_name: String,
    pub cookie_path: String,
    pub password_hash_cost: u32,
}

impl AuthConfig {
    /// Loads the session settings from the environment.
    ///
    /// There is no fallback secret: a deployment without `SESSION_SECRET`
    /// refuses to start.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("SESSION_SECRET").map_err(|_| ConfigError::MissingSecret)?;

        Self {
            secret,
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_COOKIE_NAME.to_string()),
            cookie_path: env::var("SESSION_COOKIE_PATH")
                .unwrap_or_else(|_| DEFAULT_COOKIE_PATH.to_string()),
            password_hash_cost: password_hash_cost_from_env()?,
        }
        .validated()
    }

    /// Builds a config with default cookie settings around `secret`.
    pub fn with_secret(secret: impl Into<String>) -> Result<Self, ConfigError> {
        Self {
            secret: secret.into(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
            password_hash_cost: DEFAULT_HASH_COST,
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort(self.secret.len()));
        }
        if !(4..=31).contains(&self.password_hash_cost) {
            return Err(ConfigError::InvalidHashCost(self.password_hash_cost));
        }
        Ok(self)
    }
}

/// Reads `PASSWORD_HASH_COST`. Every component that creates password hashes
/// goes through here so all stored hashes share one cost.
pub fn password_hash_cost_from_env() -> Result<u32, ConfigError> {
    parse_hash_cost(env::var("PASSWORD_HASH_COST").ok().as_deref())
}

fn parse_hash_cost(raw: Option<&str>) -> Result<u32, ConfigError> {
    let cost = raw
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_HASH_COST);
    if !(4..=31).contains(&cost) {
        return Err(ConfigError::InvalidHashCost(cost));
    }
    Ok(cost)
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("cookie_name", &self.cookie_name)
            .field("cookie_path", &self.cookie_path)
            .field("password_hash_cost", &self.password_hash_cost)
            .finish()
    }
}

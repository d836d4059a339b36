//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::DEFAULT_COST;
use platform::token::{TokenError, TokenSigner};
use thiserror::Error;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session token lifetime (7 days)
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Name of the cookie carrying the session token
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid token secret: {0}")]
    Token(#[from] TokenError),
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub token_cookie_name: String,
    /// Signs session tokens with the shared secret
    pub token_signer: TokenSigner,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt cost factor
    pub password_cost: u32,
}

impl AuthConfig {
    /// Production defaults (Secure cookie) with the given signing secret
    pub fn new(secret: &[u8]) -> Result<Self, ConfigError> {
        Ok(Self {
            token_cookie_name: TOKEN_COOKIE_NAME.to_string(),
            token_signer: TokenSigner::new(secret, TOKEN_TTL)?,
            cookie_secure: true,
            cookie_same_site: SameSite::Strict,
            password_cost: DEFAULT_COST,
        })
    }

    /// Create config for development (insecure cookie)
    pub fn development(secret: &[u8]) -> Result<Self, ConfigError> {
        Ok(Self {
            cookie_secure: false,
            ..Self::new(secret)?
        })
    }

    /// Read `JWT_SECRET` (required) and `APP_ENV` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("JWT_SECRET"))?;

        let production = lookup("APP_ENV").is_some_and(|env| env == "production");
        if production {
            Self::new(secret.as_bytes())
        } else {
            Self::development(secret.as_bytes())
        }
    }

    /// Session token lifetime
    pub fn token_ttl(&self) -> Duration {
        self.token_signer.ttl()
    }

    /// Cookie attributes for the session token
    pub fn token_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl().as_secs()),
        }
    }
}

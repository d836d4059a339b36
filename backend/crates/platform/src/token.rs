//! Session Token Signing
//!
//! Stateless session credentials: a JWT (HS256) carrying the user id and a
//! fixed expiry. Nothing is stored server-side; validity is the signature
//! plus `exp`.

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token signing/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing secret is empty
    #[error("Token signing secret must not be empty")]
    EmptySecret,

    /// Encoding failed
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Signature, algorithm or expiry check failed
    #[error("Token is invalid: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Identifier of the user the token was issued to
    pub user_id: String,
    /// Issued at (seconds since the Unix epoch)
    pub iat: u64,
    /// Expires at (seconds since the Unix epoch)
    pub exp: u64,
}

/// Signs and verifies session tokens with a shared secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        })
    }

    /// Validity window of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `user_id`, valid for [`Self::ttl`] from now
    pub fn sign(&self, user_id: &str) -> Result<String, TokenError> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = SessionClaims {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs(),
        };
        self.encode(&claims)
    }

    /// Verify signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }

    fn encode(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

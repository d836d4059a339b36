//! Signup form state
//!
//! The four fields the page collects, the local confirm-password check and
//! the JSON payload sent to the signup endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems caught before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Submitted form fields (`application/x-www-form-urlencoded`)
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Local check; a failure means no request is made
    pub fn validate(&self) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Body for `POST /api/auth/signup`
    ///
    /// A blank email (empty after trimming) is left out; otherwise it is
    /// sent exactly as typed.
    pub fn to_payload(&self) -> SignupPayload {
        let email = if self.email.trim().is_empty() {
            None
        } else {
            Some(self.email.clone())
        };

        SignupPayload {
            username: self.username.clone(),
            email,
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

/// JSON body sent to the signup endpoint
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

impl fmt::Debug for SignupPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupPayload")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

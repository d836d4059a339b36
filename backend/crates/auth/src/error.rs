//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message sent to clients for every server-side failure
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name or password absent or empty
    #[error("Username and password are required")]
    MissingCredentials,

    /// User name or email already taken
    #[error("User already exists")]
    UserAlreadyExists,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failed
    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),

    /// Token signing failed
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::Database(_)
            | AuthError::PasswordHash(_)
            | AuthError::Token(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::UserAlreadyExists => ErrorKind::Conflict,
            AuthError::Database(_)
            | AuthError::PasswordHash(_)
            | AuthError::Token(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; server-side details stay out of the message
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, SERVER_ERROR_MESSAGE)
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Session token error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserAlreadyExists => {
                tracing::debug!("Signup rejected: user already exists");
            }
            AuthError::MissingCredentials => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<UserNameError> for AuthError {
    fn from(_: UserNameError) -> Self {
        AuthError::MissingCredentials
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(_: PasswordPolicyError) -> Self {
        AuthError::MissingCredentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_message() {
        let err = AuthError::MissingCredentials.to_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Username and password are required");

        let err = AuthError::UserAlreadyExists.to_app_error();
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message(), "User already exists");
    }

    #[test]
    fn test_server_errors_hide_details() {
        let errors = [
            AuthError::Database(sqlx::Error::PoolTimedOut),
            AuthError::Internal("connection string leaked".to_string()),
            AuthError::Token(TokenError::EmptySecret),
            AuthError::PasswordHash(PasswordHashError::InvalidHashFormat),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            let app_error = err.to_app_error();
            assert_eq!(app_error.status_code(), 500);
            assert_eq!(app_error.message(), SERVER_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_validation_errors_map_to_missing_credentials() {
        assert!(matches!(
            AuthError::from(UserNameError::Empty),
            AuthError::MissingCredentials
        ));
        assert!(matches!(
            AuthError::from(PasswordPolicyError::Empty),
            AuthError::MissingCredentials
        ));
    }
}

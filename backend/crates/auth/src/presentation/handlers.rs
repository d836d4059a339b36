//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{SignUpRequest, SignUpResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
///
/// The body is parsed by hand: a malformed body carries no usable
/// credentials and is answered like a missing field (400), whatever the
/// `Content-Type`.
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    body: Bytes,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req: SignUpRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Unreadable signup body");
        AuthError::MissingCredentials
    })?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .token_cookie()
        .set_cookie_header(&output.session_token)
        .map_err(|e| AuthError::Internal(format!("Invalid cookie value: {}", e)))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignUpResponse {
            message: "User created".to_string(),
            user_id: output.user_id.to_string(),
        }),
    ))
}

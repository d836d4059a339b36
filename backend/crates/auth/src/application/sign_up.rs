//! Sign Up Use Case
//!
//! Creates a new user account and issues its session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
///
/// Fields are optional so that absent values surface as
/// [`AuthError::MissingCredentials`] rather than a parse failure.
#[derive(Default)]
pub struct SignUpInput {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: UserId,
    /// Signed session token for the cookie
    pub session_token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Presence checks, before any store access
        let user_name = input
            .user_name
            .ok_or(AuthError::MissingCredentials)
            .and_then(|name| UserName::new(name).map_err(AuthError::from))?;
        let raw_password = input
            .password
            .ok_or(AuthError::MissingCredentials)
            .and_then(|pw| RawPassword::new(pw).map_err(AuthError::from))?;
        let email = Email::from_optional(input.email);

        if self
            .user_repo
            .find_by_user_name_or_email(&user_name, email.as_ref())
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists);
        }

        // bcrypt is CPU-bound; keep it off the async workers
        let cost = self.config.password_cost;
        let password_hash =
            tokio::task::spawn_blocking(move || UserPassword::from_raw(&raw_password, cost))
                .await
                .map_err(|e| AuthError::Internal(format!("password hashing task failed: {e}")))??;

        let user = User::new(user_name, email, password_hash);

        // Races with a concurrent signup end here as UserAlreadyExists
        self.user_repo.create(&user).await?;

        let session_token = self.config.token_signer.sign(&user.user_id.to_string())?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            has_email = user.email.is_some(),
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user.user_id,
            session_token,
        })
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
///
/// The store is the final arbiter of uniqueness: `create` must fail with
/// [`AuthError::UserAlreadyExists`](crate::error::AuthError::UserAlreadyExists)
/// when another user already holds the handle or the email, even if a prior
/// lookup found nothing.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find a user whose handle equals `user_name`, or whose email equals
    /// `email` when one is given
    async fn find_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: Option<&Email>,
    ) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Persist a new user
    async fn create(&self, user: &User) -> AuthResult<()>;
}

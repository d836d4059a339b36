//! In-memory user repository for tests and database-less local runs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Map-backed repository. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_user_name_or_email(
        &self,
        user_name: &UserName,
        email: Option<&Email>,
    ) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.conflicts_with(user_name, email))
            .cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        // Same guarantee as the unique indexes
        if users
            .values()
            .any(|u| u.conflicts_with(&user.user_name, user.email.as_ref()))
        {
            return Err(AuthError::UserAlreadyExists);
        }

        users.insert(user.user_id, user.clone());
        Ok(())
    }
}

//! User Entity
//!
//! A registered account. Created once at signup; never updated by this crate.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier, embedded in the session token
    pub user_id: UserId,
    /// Unique handle
    pub user_name: UserName,
    /// Unique among users that have one
    pub email: Option<Email>,
    /// bcrypt hash; the clear text is never kept
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(user_name: UserName, email: Option<Email>, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Whether this user would collide with the given handle or email
    pub fn conflicts_with(&self, user_name: &UserName, email: Option<&Email>) -> bool {
        if &self.user_name == user_name {
            return true;
        }
        match (self.email.as_ref(), email) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}

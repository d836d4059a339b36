//! User Name Value Object
//!
//! The handle a user signs up with. Any non-empty string is accepted and
//! stored exactly as submitted: no trimming, no case folding. Uniqueness is
//! checked on the exact value.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,
}

/// User name value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl Into<String>) -> Result<Self, UserNameError> {
        let value = value.into();
        if value.is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(user_name: UserName) -> Self {
        user_name.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(UserName::new("").unwrap_err(), UserNameError::Empty);
    }

    #[test]
    fn test_value_kept_verbatim() {
        let name = UserName::new("  Alice ").unwrap();
        assert_eq!(name.as_str(), "  Alice ");
        assert_ne!(name, UserName::new("alice").unwrap());
    }

    #[test]
    fn test_display() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(name.to_string(), "alice");
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<UserName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let name: UserName = serde_json::from_str("\"bob\"").unwrap();
        assert_eq!(name.as_str(), "bob");
    }
}

//! User Password Value Object
//!
//! Domain wrappers over `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("hunter2".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, 4).unwrap();
//! assert!(hashed.verify(&raw));
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped. Not `Clone`.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Any non-empty string is accepted
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Salted bcrypt hash, the only password form that is persisted
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password. CPU-bound.
    pub fn from_raw(raw: &RawPassword, cost: u32) -> Result<Self, PasswordHashError> {
        raw.inner().hash(cost).map(Self)
    }

    /// Restore from the stored hash string
    pub fn from_stored(hash: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_stored(hash).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

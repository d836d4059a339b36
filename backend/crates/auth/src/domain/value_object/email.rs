//! Email Value Object
//!
//! Optional contact address. No format validation is applied; the value is
//! stored and compared exactly as submitted. An empty string means "no email".

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Email address value object (always non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Returns `None` for an empty string
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Normalize an optional submitted value: absent and empty are the same
    pub fn from_optional(value: Option<String>) -> Option<Self> {
        value.and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

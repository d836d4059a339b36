//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by every crate in the workspace:
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed identifiers ([`id::Id`])
//!
//! **Design Principle**: only things whose meaning is the same in every
//! domain live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

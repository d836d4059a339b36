//! Web Frontend Module
//!
//! Server-rendered signup form. The form posts to this crate, which checks
//! the confirm-password field and relays the signup to the JSON endpoint
//! over HTTP.
//!
//! ## Routes
//! - `GET /signup` - the form
//! - `POST /signup` - submission; `303` to `/setup-profile` on success
//! - `GET /setup-profile` - landing page after signup

pub mod client;
pub mod form;
pub mod handlers;
pub mod pages;
pub mod router;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{ClientError, HttpSignupApi, SignupApi, SignupReply};
pub use form::{FormError, SignupForm, SignupPayload};
pub use router::{web_router, web_router_generic};

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt)
//! - Signed, time-bounded session tokens (JWT, HS256)
//! - Cookie management

pub mod cookie;
pub mod password;
pub mod token;

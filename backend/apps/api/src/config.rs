//! Server Configuration
//!
//! Process-level settings read from the environment at startup.
//! Auth settings (`JWT_SECRET`) live in `auth::AuthConfig`.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use anyhow::Context;
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// CORS allow-list
    pub frontend_origins: Vec<HeaderValue>,
    /// Base URL the signup form posts to
    pub signup_api_url: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {value}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .with_context(|| format!("invalid BIND_ADDR: {bind_addr_raw}"))?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let signup_api_url = lookup("SIGNUP_API_URL")
            .unwrap_or_else(|| default_signup_api_url(bind_addr));

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            signup_api_url,
        })
    }
}

/// The server itself, reached through the bound host or loopback for a wildcard bind
fn default_signup_api_url(bind_addr: SocketAddr) -> String {
    let host = match bind_addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}", SocketAddr::new(host, bind_addr.port()))
}

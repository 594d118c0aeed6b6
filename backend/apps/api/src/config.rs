//! Server Configuration
//!
//! Process-level settings read from the environment (`.env` is loaded
//! first by `main`). Token and password settings live in
//! [`auth::AuthConfig`].

use std::net::SocketAddr;

use anyhow::{Context, bail};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Which origins CORS lets through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: AllowedOrigins,
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
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL must be set in environment")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be positive");
        }

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("Invalid BIND_ADDR")?;

        let frontend_origins = parse_origins(&lookup("FRONTEND_ORIGINS").unwrap_or_default());

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
        })
    }
}

/// Comma-separated origins; `*` (or nothing) allows any origin
pub fn parse_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

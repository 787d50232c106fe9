//! Runtime configuration for the server process, read from the environment.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Upper bound for any request body, enforced by `fileserv::limit_request_bodies`.
/// Image uploads travel as JSON byte arrays, so this is well above the 5 MiB
/// file limit.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("`PORT` must be a u16, got {0:?}")]
    InvalidPort(String),
    #[error("`API_URL` must be an http(s) URL, got {0:?}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    /// Overrides the Leptos site address when set.
    pub bind_addr: Option<SocketAddr>,
}

impl AppConfig {
    /// Reads `API_URL` and `PORT`. A `.env` file in the working directory is
    /// loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Self::from_vars(
            std::env::var("API_URL").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    pub fn from_vars(api_url: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url.to_string()));
        }

        let bind_addr = match port {
            Some(port) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
                Some(SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)))
            }
            None => None,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bind_addr,
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

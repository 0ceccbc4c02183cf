use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub mod security;

pub use security::SecurityHeadersLayer;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/mp_webhook";
const DEFAULT_API_BASE_URL: &str = "https://api.mercadopago.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Bearer credential for the payment lookup API.
    pub access_token: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub port: u16,
    /// Set when `RUST_ENV=production`; enables HSTS.
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let access_token =
            non_empty("MP_ACCESS_TOKEN").ok_or(ConfigError::Missing("MP_ACCESS_TOKEN"))?;

        let request_timeout = match non_empty("MP_REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse("MP_REQUEST_TIMEOUT_SECS", value)?),
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let port = match non_empty("PORT") {
            Some(value) => parse("PORT", value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: non_empty("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            access_token,
            api_base_url: non_empty("MP_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout,
            port,
            production: lookup("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}

//! Environment-driven configuration

use std::env;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Deployment environment name (`ENVIRONMENT`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Settings for the HTTP listener and the webhook endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body, in bytes
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `WEBHOOK_BODY_LIMIT_BYTES`.
    ///
    /// Unset variables keep their defaults. Values that fail to parse are
    /// logged and also fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port),
            body_limit_bytes: parse_var("WEBHOOK_BODY_LIMIT_BYTES", defaults.body_limit_bytes),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => parse_or(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(name: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(
            variable = name,
            value = raw,
            default = %default,
            "Ignoring malformed environment value"
        );
        default
    })
}

/**
 * Server Configuration
 *
 * This module builds the server configuration once at startup from
 * environment variables (after `.env` has been loaded by the binary).
 * The resulting [`ServerConfig`] is passed to constructors; nothing reads
 * the environment afterwards.
 *
 * # Variables
 *
 * | Variable                   | Default                       |
 * |----------------------------|-------------------------------|
 * | `SERVER_URL`               | required                      |
 * | `DATABASE_URL`             | `sqlite://database/forum.db`  |
 * | `DATABASE_MAX_CONNECTIONS` | `10`                          |
 * | `SESSION_TTL_HOURS`        | `24`                          |
 * | `BCRYPT_COST`              | `bcrypt::DEFAULT_COST`        |
 *
 * `RUST_LOG` is read by the tracing subscriber, not here.
 */

use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database/forum.db";
pub const DEFAULT_BIND_ADDRESS: &str = "localhost:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Public URL of the server as configured
    pub server_url: String,
    /// `host:port` the listener binds to
    pub bind_address: String,
    /// Whether the session cookie carries the `Secure` attribute
    pub secure_cookies: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub session_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Configuration for `server_url` with every other setting at its default
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            bind_address: bind_address(&server_url),
            secure_cookies: is_https(&server_url),
            server_url,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let server_url = get("SERVER_URL").ok_or(ConfigError::Missing("SERVER_URL"))?;
        let mut config = Self::new(server_url.trim());

        if let Some(url) = get("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(value) = get("DATABASE_MAX_CONNECTIONS") {
            config.database_max_connections = parse("DATABASE_MAX_CONNECTIONS", &value)?;
            if config.database_max_connections == 0 {
                return Err(invalid("DATABASE_MAX_CONNECTIONS", &value, "must be at least 1"));
            }
        }
        if let Some(value) = get("SESSION_TTL_HOURS") {
            config.session_ttl_hours = parse("SESSION_TTL_HOURS", &value)?;
            if config.session_ttl_hours <= 0 {
                return Err(invalid("SESSION_TTL_HOURS", &value, "must be positive"));
            }
        }
        if let Some(value) = get("BCRYPT_COST") {
            config.bcrypt_cost = parse("BCRYPT_COST", &value)?;
            if !(4..=31).contains(&config.bcrypt_cost) {
                return Err(invalid("BCRYPT_COST", &value, "must be between 4 and 31"));
            }
        }

        Ok(config)
    }

    /// Lifetime of new sessions
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| invalid(name, value, &e.to_string()))
}

fn invalid(name: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn is_https(url: &str) -> bool {
    url.get(..8)
        .map(|scheme| scheme.eq_ignore_ascii_case("https://"))
        .unwrap_or(false)
}

/// Host portion (`host[:port]`) of a URL, or the default when it has none
fn bind_address(url: &str) -> String {
    let host = match url.split_once("://") {
        Some((_, rest)) => rest.split(['/', '?', '#']).next().unwrap_or(""),
        None => "",
    };
    let host = host.rsplit('@').next().unwrap_or(host);

    if host.is_empty() {
        DEFAULT_BIND_ADDRESS.to_string()
    } else {
        host.to_string()
    }
}

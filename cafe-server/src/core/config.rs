//! Server configuration

use std::fmt;

/// Configuration error, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SECRET_KEY | (required) | CSRF signing key |
/// | DATABASE_URL | sqlite:cafes.db | SQLite connection string |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 5000 | HTTP port |
/// | CSRF_TIME_LIMIT_SECS | 3600 | CSRF token lifetime |
/// | ENVIRONMENT | development | development / production |
///
/// ```ignore
/// SECRET_KEY=change-me HTTP_PORT=8080 cargo run -p cafe-server
/// ```
#[derive(Clone)]
pub struct Config {
    /// Key used to sign form tokens
    pub secret_key: String,
    /// SQLite connection string
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    /// Lifetime of an issued CSRF token, in seconds
    pub csrf_time_limit_secs: u64,
    /// Environment: development | production
    pub environment: String,
}

impl Config {
    pub const DEFAULT_DATABASE_URL: &'static str = "sqlite:cafes.db";
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    pub const DEFAULT_CSRF_TIME_LIMIT_SECS: u64 = 3600;

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let secret_key = var("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;

        Ok(Self {
            secret_key,
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_DATABASE_URL.into()),
            http_host: var("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_var("HTTP_PORT", var("HTTP_PORT"), Self::DEFAULT_HTTP_PORT)?,
            csrf_time_limit_secs: parse_var(
                "CSRF_TIME_LIMIT_SECS",
                var("CSRF_TIME_LIMIT_SECS"),
                Self::DEFAULT_CSRF_TIME_LIMIT_SECS,
            )?,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("http_host", &self.http_host)
            .field("http_port", &self.http_port)
            .field("csrf_time_limit_secs", &self.csrf_time_limit_secs)
            .field("environment", &self.environment)
            .finish()
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}

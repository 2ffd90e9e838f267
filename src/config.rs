use std::time::Duration;

use anyhow::{ensure, Context};
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// The single web origin allowed to call the API cross-origin.
    pub allowed_origin: HeaderValue,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let allowed_origin = lookup("ALLOWED_ORIGIN")
            .unwrap_or_else(|| "http://localhost:5173".to_string());
        ensure!(allowed_origin != "*", "ALLOWED_ORIGIN must name a single origin, not *");
        let allowed_origin = HeaderValue::from_str(&allowed_origin)
            .context("ALLOWED_ORIGIN must be a valid header value")?;

        let timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid number")?;
        ensure!(timeout_secs > 0, "REQUEST_TIMEOUT_SECS must be > 0");

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origin,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use anyhow::{Context, Result};

/// Default service base URL; a locally run service listens on port 5000.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client configuration loaded from environment variables.
/// Every field has a default, so a bare `optimizer` invocation works against
/// a local service; CLI flags override after loading.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            endpoint: std::env::var("OPTIMIZER_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            request_timeout_secs: std::env::var("OPTIMIZER_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("OPTIMIZER_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

use std::env;
use std::time::Duration;

use definitiveid_client::DEFAULT_BASE_URL;
use url::Url;

use crate::error::{DriverError, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("did-andorra-driver/", env!("CARGO_PKG_VERSION"));

/// Driver configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub base_url: String,
    pub upstream_timeout: Duration,
    pub user_agent: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let base_url = lookup("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        check_base_url(&base_url)?;

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));

        Ok(Self {
            port,
            base_url,
            upstream_timeout,
            user_agent: USER_AGENT.to_string(),
        })
    }
}

fn check_base_url(base_url: &str) -> Result<()> {
    let parsed = Url::parse(base_url)
        .map_err(|e| DriverError::Config(format!("BASE_URL {base_url:?} is not a URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(DriverError::Config(format!(
            "BASE_URL must use http or https, got {scheme}"
        ))),
    }
}

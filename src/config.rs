//! Storefront API configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://ab-education.ru/api";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Resolved endpoint URLs plus transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub health_url: String,
    pub boxes_url: String,
    pub orders_url: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Derive every endpoint from one base URL.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_owned();
        Self {
            health_url: format!("{base_url}/health"),
            boxes_url: format!("{base_url}/boxes"),
            orders_url: format!("{base_url}/orders"),
            base_url,
            request_timeout: None,
        }
    }

    /// Build typed API config from environment variables.
    ///
    /// Optional:
    /// - `GIFTBOX_API_BASE_URL`: default [`DEFAULT_API_BASE_URL`]
    /// - `GIFTBOX_HEALTH_URL`, `GIFTBOX_BOXES_URL`, `GIFTBOX_ORDERS_URL`:
    ///   per-endpoint overrides, default `{base}/health|boxes|orders`
    /// - `GIFTBOX_REQUEST_TIMEOUT_SECS`: no timeout when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is set but is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("GIFTBOX_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        let mut config = Self::with_base_url(&base_url);

        if let Some(url) = env_url("GIFTBOX_HEALTH_URL") {
            config.health_url = url;
        }
        if let Some(url) = env_url("GIFTBOX_BOXES_URL") {
            config.boxes_url = url;
        }
        if let Some(url) = env_url("GIFTBOX_ORDERS_URL") {
            config.orders_url = url;
        }

        config.request_timeout = parse_timeout(std::env::var("GIFTBOX_REQUEST_TIMEOUT_SECS").ok().as_deref())?;
        Ok(config)
    }

    /// URL of a single box: `{boxes_url}/{id}`.
    #[must_use]
    pub fn box_url(&self, id: i64) -> String {
        format!("{}/{id}", self.boxes_url)
    }
}

fn env_url(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(raw: Option<&str>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::InvalidValue { var: "GIFTBOX_REQUEST_TIMEOUT_SECS", value: raw.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

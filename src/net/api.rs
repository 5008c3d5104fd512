//! REST client for the storefront API.
//!
//! The catalog screen talks to the service only through the [`Storefront`]
//! trait so tests can swap in a scripted implementation. [`HttpStorefront`]
//! is the real `reqwest`-backed client.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed [`ApiError`]. Transport failures, non-2xx
//! statuses, and undecodable bodies stay distinguishable here for logging;
//! the screen collapses them into a single user-facing notification.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{GiftBox, HealthStatus, OrderForm, OrderReceipt, OrderSummary};
use crate::config::ApiConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by storefront API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// TRAIT
// =============================================================================

/// The two operations the catalog screen needs from the service.
#[async_trait::async_trait]
pub trait Storefront: Send + Sync {
    /// `GET /boxes` — the full product list in service order.
    async fn fetch_boxes(&self) -> Result<Vec<GiftBox>, ApiError>;

    /// `POST /orders` — create an order. Any 2xx is success; the receipt is
    /// `None` when the body is empty or not a receipt.
    async fn submit_order(&self, form: &OrderForm) -> Result<Option<OrderReceipt>, ApiError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// `reqwest`-backed [`Storefront`] bound to one [`ApiConfig`].
#[derive(Clone, Debug)]
pub struct HttpStorefront {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpStorefront {
    /// Build a client for the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json(&self.config.health_url).await
    }

    /// `GET /boxes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with 404 when the box does not exist.
    pub async fn fetch_box(&self, id: i64) -> Result<GiftBox, ApiError> {
        self.get_json(&self.config.box_url(id)).await
    }

    /// `GET /orders` — newest first, joined with box title and price.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or bad body.
    pub async fn fetch_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        self.get_json(&self.config.orders_url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let text = success_body(response).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Storefront for HttpStorefront {
    async fn fetch_boxes(&self) -> Result<Vec<GiftBox>, ApiError> {
        let boxes: Vec<GiftBox> = self.get_json(&self.config.boxes_url).await?;
        tracing::debug!(count = boxes.len(), url = %self.config.boxes_url, "fetched boxes");
        Ok(boxes)
    }

    async fn submit_order(&self, form: &OrderForm) -> Result<Option<OrderReceipt>, ApiError> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(&self.config.orders_url)
            .json(form)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let text = success_body(response).await?;
        Ok(parse_receipt(&text))
    }
}

/// Read the body of a 2xx response, or turn anything else into
/// [`ApiError::Status`] carrying the body for diagnostics.
async fn success_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), body: text });
    }
    Ok(text)
}

fn parse_receipt(text: &str) -> Option<OrderReceipt> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

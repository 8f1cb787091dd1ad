// REST-backed room type catalog. Posts the stay window to the booking
// backend's search endpoint and decodes per-hotel availability. Retries
// belong here, at the data-fetch step; allocation itself never fails.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, RoomTypeCatalog};
use crate::model::{HotelAvailability, StayWindow};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("backend error: {status_code} - {message}")]
    BackendError { status_code: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 100,
            max_backoff_ms: 10000,
            backoff_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 5000,
            retry: RetryConfig::default(),
        }
    }
}

impl RetryConfig {
    // Backoff before the given retry attempt (1-based), capped at the
    // configured maximum.
    fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff = self.initial_backoff_ms as f64
            * self.backoff_multiplier.powi(attempt.saturating_sub(1) as i32);
        Duration::from_millis((backoff as u64).min(self.max_backoff_ms))
    }
}

// JSON body of the availability request, matching the backend's camelCase
// search payload. Room requests are not sent; allocation happens locally.
#[derive(Debug, Serialize)]
struct AvailabilityRequest<'a> {
    #[serde(flatten)]
    stay: &'a StayWindow,
}

pub struct RestCatalog {
    config: ClientConfig,
    http: reqwest::Client,
}

impl RestCatalog {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.base_url.is_empty() {
            return Err(ClientError::ConfigError("base_url is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClientError::ConfigError(e.to_string()))?;

        Ok(Self { config, http })
    }

    fn search_url(&self) -> String {
        format!("{}/api/search", self.config.base_url.trim_end_matches('/'))
    }

    async fn fetch_once(&self, stay: &StayWindow) -> Result<Vec<HotelAvailability>, ClientError> {
        let response = self
            .http
            .post(self.search_url())
            .json(&AvailabilityRequest { stay })
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::BackendError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<HotelAvailability>>()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))
    }

    fn is_retryable(error: &ClientError) -> bool {
        match error {
            ClientError::NetworkError(_) => true,
            ClientError::BackendError { status_code, .. } => *status_code >= 500,
            ClientError::ConfigError(_) => false,
        }
    }
}

#[async_trait]
impl RoomTypeCatalog for RestCatalog {
    async fn fetch_availability(
        &self,
        stay: &StayWindow,
    ) -> Result<Vec<HotelAvailability>, CatalogError> {
        let mut attempt = 0;

        loop {
            debug!(url = %self.search_url(), attempt, "fetching availability");

            match self.fetch_once(stay).await {
                Ok(hotels) => {
                    debug!(hotels = hotels.len(), "availability fetched");
                    return Ok(hotels);
                }
                Err(error) => {
                    attempt += 1;
                    if attempt > self.config.retry.max_retries || !Self::is_retryable(&error) {
                        return Err(match error {
                            ClientError::BackendError {
                                status_code,
                                message,
                            } if status_code < 500 => CatalogError::InvalidPayload(format!(
                                "backend returned {}: {}",
                                status_code, message
                            )),
                            other => CatalogError::Unreachable(other.to_string()),
                        });
                    }

                    let backoff = self.config.retry.backoff_for_attempt(attempt);
                    warn!(attempt, backoff_ms = backoff.as_millis() as u64, %error,
                        "availability fetch failed, retrying");
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }
}

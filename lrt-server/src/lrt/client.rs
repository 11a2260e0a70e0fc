//! HTTP client for the next-train endpoint.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::StationId;

use super::error::LrtError;
use super::types::ScheduleResponse;

/// Default base URL for the public next-train endpoint.
const DEFAULT_BASE_URL: &str = "https://rt.data.gov.hk/v1/transport/mtr/lrt/getSchedule";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct LrtConfig {
    /// Base URL for the API (defaults to the production endpoint).
    pub base_url: String,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LrtConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }
}

impl LrtConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Anything that can produce a raw schedule payload for a station.
///
/// Implemented by the real HTTP client and by the mock. Batch and
/// route-view assembly are generic over this so tests can substitute
/// canned boards.
pub trait ScheduleSource: Send + Sync {
    /// Fetch the raw schedule payload for one station.
    fn get_schedule(
        &self,
        id: &StationId,
    ) -> impl Future<Output = Result<ScheduleResponse, LrtError>> + Send;
}

/// Client for the next-train API.
///
/// A semaphore bounds in-flight requests; route-mode batches fan out one
/// request per station and the upstream has no documented rate limit, so
/// the bound is a courtesy rather than a requirement.
#[derive(Debug, Clone)]
pub struct LrtClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl LrtClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LrtConfig) -> Result<Self, LrtError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

impl ScheduleSource for LrtClient {
    async fn get_schedule(&self, id: &StationId) -> Result<ScheduleResponse, LrtError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| LrtError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("station_id", id.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LrtError::Api {
                status: status.as_u16() as i32,
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| LrtError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LrtConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = LrtConfig::default()
            .with_base_url("http://localhost:8080/getSchedule")
            .with_max_concurrent(2)
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080/getSchedule");
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        assert!(LrtClient::new(LrtConfig::default()).is_ok());
    }
}

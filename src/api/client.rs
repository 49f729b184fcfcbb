use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;

use crate::api::error::DogApiError;
use crate::api::types::DogsResponse;
use crate::config::ApiConfig;

/// Smallest batch the service accepts.
pub const MIN_LIMIT: u8 = 1;
/// Largest batch the service accepts.
pub const MAX_LIMIT: u8 = 20;

const DOGS_PATH: &str = "/api/v1/dog";
const MAX_ERROR_BODY: usize = 512;

/// Raw access to the dog service.
///
/// `limit` must be within `MIN_LIMIT..=MAX_LIMIT`; implementations pass it
/// through unchanged and leave the bound to the caller.
#[async_trait]
pub trait DogApi: Send + Sync {
    /// Fetch a batch of random dogs.
    async fn get_random(&self, limit: u8) -> Result<DogsResponse, DogApiError>;
}

/// `DogApi` over HTTPS with reqwest.
pub struct HttpDogApi {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpDogApi {
    pub fn new(config: &ApiConfig) -> Result<Self, DogApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(concat!("dogfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| DogApiError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    fn random_url(&self, limit: u8) -> String {
        format!("{}{}?limit={}", self.base_url, DOGS_PATH, limit)
    }

    async fn do_get(&self, url: String) -> Result<DogsResponse, DogApiError> {
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| DogApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| DogApiError::Transport { url, source })?;

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(|source| DogApiError::Decode { source });
        }

        // Error statuses may still carry the service's own error payload;
        // let the repository report that message instead of a bare status.
        if let Ok(payload) = serde_json::from_slice::<DogsResponse>(&body) {
            if payload.service_error().is_some() {
                return Ok(payload);
            }
        }

        let text = String::from_utf8_lossy(&body);
        Err(DogApiError::Status {
            status: status.as_u16(),
            body: text.chars().take(MAX_ERROR_BODY).collect(),
        })
    }
}

#[async_trait]
impl DogApi for HttpDogApi {
    async fn get_random(&self, limit: u8) -> Result<DogsResponse, DogApiError> {
        let url = self.random_url(limit);
        tracing::debug!(url = %url, "Requesting dogs");

        match timeout(self.request_timeout, self.do_get(url)).await {
            Ok(result) => result,
            Err(_) => Err(DogApiError::Timeout {
                duration_ms: self.request_timeout.as_millis() as u64,
            }),
        }
    }
}

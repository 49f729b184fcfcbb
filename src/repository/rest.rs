use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Dog, DogApi, MAX_LIMIT, MIN_LIMIT};
use crate::repository::{DogRepository, FetchError};

/// Repository backed by the remote dog service.
pub struct RestDogRepository {
    api: Arc<dyn DogApi>,
}

impl RestDogRepository {
    pub fn new(api: Arc<dyn DogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DogRepository for RestDogRepository {
    async fn get_random_dogs(&self, max: u8) -> Result<Vec<Dog>, FetchError> {
        let limit = max.clamp(MIN_LIMIT, MAX_LIMIT);
        if limit != max {
            tracing::warn!(requested = max, limit, "Dog batch size clamped to service limit");
        }

        let response = self.api.get_random(limit).await?;
        if let Some(message) = response.service_error() {
            return Err(FetchError::ServiceReported {
                message: message.to_string(),
            });
        }

        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DogApiError, DogsResponse};
    use parking_lot::Mutex;

    struct ScriptedApi {
        limits: Mutex<Vec<u8>>,
        response: fn() -> Result<DogsResponse, DogApiError>,
    }

    impl ScriptedApi {
        fn new(response: fn() -> Result<DogsResponse, DogApiError>) -> Arc<Self> {
            Arc::new(Self {
                limits: Mutex::new(Vec::new()),
                response,
            })
        }
    }

    #[async_trait]
    impl DogApi for ScriptedApi {
        async fn get_random(&self, limit: u8) -> Result<DogsResponse, DogApiError> {
            self.limits.lock().push(limit);
            (self.response)()
        }
    }

    fn two_dogs() -> Result<DogsResponse, DogApiError> {
        Ok(DogsResponse {
            data: vec![
                Dog::new("a", "http://x/a.jpg", "t1", "jpg"),
                Dog::new("b", "http://x/b.png", "t2", "png"),
            ],
            count: 2,
            error: None,
        })
    }

    fn rate_limited() -> Result<DogsResponse, DogApiError> {
        Ok(DogsResponse {
            data: Vec::new(),
            count: 0,
            error: Some("rate limited".to_string()),
        })
    }

    fn unavailable() -> Result<DogsResponse, DogApiError> {
        Err(DogApiError::Status {
            status: 503,
            body: "down".to_string(),
        })
    }

    #[tokio::test]
    async fn test_returns_data_in_order() {
        let api = ScriptedApi::new(two_dogs);
        let repository = RestDogRepository::new(api.clone());

        let dogs = repository.get_random_dogs(10).await.unwrap();
        let ids: Vec<_> = dogs.iter().map(|dog| dog.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(*api.limits.lock(), vec![10]);
    }

    #[tokio::test]
    async fn test_service_error_becomes_failure() {
        let repository = RestDogRepository::new(ScriptedApi::new(rate_limited));

        let err = repository.get_random_dogs(10).await.unwrap_err();
        assert!(matches!(
            &err,
            FetchError::ServiceReported { message } if message == "rate limited"
        ));
        assert_eq!(err.kind(), "service_reported");
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let repository = RestDogRepository::new(ScriptedApi::new(unavailable));

        let err = repository.get_random_dogs(10).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(DogApiError::Status { status: 503, .. })));
        assert_eq!(err.kind(), "status");
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let api = ScriptedApi::new(two_dogs);
        let repository = RestDogRepository::new(api.clone());

        repository.get_random_dogs(0).await.unwrap();
        repository.get_random_dogs(50).await.unwrap();
        assert_eq!(*api.limits.lock(), vec![MIN_LIMIT, MAX_LIMIT]);
    }
}

//! Domain access to dogs.
//!
//! The presenter only sees [`DogRepository`]; the REST implementation
//! translates the service payload and its error field into a `Result`.

mod error;
mod rest;

use async_trait::async_trait;

use crate::api::Dog;

pub use error::FetchError;
pub use rest::RestDogRepository;

/// Source of random dogs.
///
/// Implementations do no caching; that belongs to the presenter.
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Fetch up to `max` random dogs, in service order.
    async fn get_random_dogs(&self, max: u8) -> Result<Vec<Dog>, FetchError>;
}

//! Client for the remote dog picture service.
//!
//! One endpoint, `GET /api/v1/dog?limit=N`, returning a bounded batch of
//! dogs or a service-reported error.

mod client;
mod error;
mod types;

pub use client::{DogApi, HttpDogApi, MAX_LIMIT, MIN_LIMIT};
pub use error::DogApiError;
pub use types::{Dog, DogsResponse};

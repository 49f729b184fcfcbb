//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use dogfeed::api::Dog;
use dogfeed::presentation::DogsListViewModel;
use dogfeed::repository::{DogRepository, FetchError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn dog(id: &str) -> Dog {
    Dog::new(id, format!("http://x/{id}.jpg"), format!("t{id}"), "jpg")
}

/// Let every timer and spawned task run to completion on a paused clock.
pub async fn settle() {
    tokio::time::sleep(Duration::from_secs(2)).await;
}

struct ScriptedFetch {
    delay: Duration,
    result: Result<Vec<Dog>, FetchError>,
}

/// Repository that replays scripted results and records how it was called.
///
/// Unscripted calls succeed immediately with an empty list.
pub struct FakeRepository {
    calls: AtomicUsize,
    script: Mutex<VecDeque<ScriptedFetch>>,
    observed: Mutex<Option<DogsListViewModel>>,
    loading_at_call: Mutex<Vec<Option<bool>>>,
}

impl FakeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(VecDeque::new()),
            observed: Mutex::new(None),
            loading_at_call: Mutex::new(Vec::new()),
        })
    }

    pub fn enqueue_dogs(&self, dogs: Vec<Dog>) {
        self.enqueue(Duration::ZERO, Ok(dogs));
    }

    pub fn enqueue(&self, delay: Duration, result: Result<Vec<Dog>, FetchError>) {
        self.script.lock().push_back(ScriptedFetch { delay, result });
    }

    /// Record `view_model`'s loading flag whenever a fetch reaches us.
    pub fn observe(&self, view_model: &DogsListViewModel) {
        *self.observed.lock() = Some(view_model.clone());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn loading_at_call(&self) -> Vec<Option<bool>> {
        self.loading_at_call.lock().clone()
    }
}

#[async_trait]
impl DogRepository for FakeRepository {
    async fn get_random_dogs(&self, _max: u8) -> Result<Vec<Dog>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(view_model) = self.observed.lock().as_ref() {
            self.loading_at_call
                .lock()
                .push(view_model.current_loading());
        }

        let next = self.script.lock().pop_front();
        let Some(ScriptedFetch { delay, result }) = next else {
            return Ok(Vec::new());
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}

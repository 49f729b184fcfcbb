//! Presenter for the dogs list.
//!
//! Reload clicks from the attached view are debounced, the survivor starts
//! a fetch through the repository, and the outcome is published to the
//! view model. The last successful batch is cached so a re-attached view
//! renders at once without going back to the network.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::api::Dog;
use crate::config::PresenterConfig;
use crate::presentation::debounce::Debouncer;
use crate::presentation::view::DogsListView;
use crate::presentation::view_model::DogsListViewModel;
use crate::repository::{DogRepository, FetchError};

/// Drives the dogs list: reload handling, fetching and caching.
///
/// Must be used from within a tokio runtime. Dropping the presenter tears
/// it down like [`DogsListPresenter::destroy`].
pub struct DogsListPresenter {
    inner: Arc<PresenterInner>,
}

struct PresenterInner {
    repository: Arc<dyn DogRepository>,
    batch_size: u8,
    debouncer: Debouncer,
    state: Mutex<PresenterState>,
}

#[derive(Default)]
struct PresenterState {
    /// Last successful batch; replaced wholesale, never merged.
    cache: Vec<Dog>,
    view_model: Option<DogsListViewModel>,
    view_listener: Option<JoinHandle<()>>,
    fetch: Option<JoinHandle<()>>,
    /// Bumped per fetch; only the newest fetch may complete.
    generation: u64,
    destroyed: bool,
}

impl DogsListPresenter {
    pub fn new(repository: Arc<dyn DogRepository>, config: &PresenterConfig) -> Self {
        Self {
            inner: Arc::new(PresenterInner {
                repository,
                batch_size: config.batch_size,
                debouncer: Debouncer::new(Duration::from_millis(config.click_debounce_ms)),
                state: Mutex::new(PresenterState::default()),
            }),
        }
    }

    /// Attach a view.
    ///
    /// Subscribes to the view's reload clicks and publishes the cached
    /// dogs. If a fetch is in flight the view shows it as loading and gets
    /// its result; otherwise an empty cache starts a fetch right away.
    /// A previously attached view is detached first.
    pub fn attach_view(&self, view: DogsListView) {
        let DogsListView {
            view_model,
            mut reload_clicks,
        } = view;

        let needs_fetch = {
            let mut state = self.inner.state.lock();
            if state.destroyed {
                tracing::warn!("View attached to a destroyed presenter; ignoring");
                return;
            }
            if let Some(listener) = state.view_listener.take() {
                listener.abort();
                self.inner.debouncer.cancel();
            }

            let inner = Arc::clone(&self.inner);
            state.view_listener = Some(tokio::spawn(async move {
                while reload_clicks.recv().await.is_some() {
                    let target = Arc::clone(&inner);
                    inner.debouncer.call(move || target.start_fetch());
                }
                tracing::debug!("Reload click stream closed");
            }));
            state.view_model = Some(view_model.clone());

            // A fetch still in flight completes into this view.
            let fetching = state.fetch.is_some();
            if !state.cache.is_empty() {
                view_model.set_dogs(state.cache.clone());
            }
            if fetching {
                view_model.set_loading(true);
            } else if !state.cache.is_empty() {
                view_model.set_loading(false);
            }
            !fetching && state.cache.is_empty()
        };

        tracing::debug!(
            needs_fetch,
            debounce_ms = self.inner.debouncer.window().as_millis() as u64,
            "View attached"
        );
        if needs_fetch {
            self.inner.start_fetch();
        }
    }

    /// Detach the current view.
    ///
    /// Stops listening for its reload clicks and drops any pending
    /// debounced click. The cache is kept for the next attachment.
    pub fn detach_view(&self) {
        let mut state = self.inner.state.lock();
        if let Some(listener) = state.view_listener.take() {
            listener.abort();
        }
        state.view_model = None;
        self.inner.debouncer.cancel();
        tracing::debug!("View detached");
    }

    /// Start a fetch immediately, bypassing the debounce.
    pub fn reload(&self) {
        self.inner.start_fetch();
    }

    /// Tear the presenter down.
    ///
    /// Aborts the in-flight fetch and the click listener and cancels any
    /// pending click. Nothing is published afterwards.
    pub fn destroy(&self) {
        let mut state = self.inner.state.lock();
        if state.destroyed {
            return;
        }
        state.destroyed = true;
        if let Some(listener) = state.view_listener.take() {
            listener.abort();
        }
        if let Some(fetch) = state.fetch.take() {
            fetch.abort();
        }
        state.view_model = None;
        self.inner.debouncer.cancel();
        tracing::debug!("Presenter destroyed");
    }

    /// Snapshot of the cached dogs.
    pub fn cached_dogs(&self) -> Vec<Dog> {
        self.inner.state.lock().cache.clone()
    }
}

impl Drop for DogsListPresenter {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl PresenterInner {
    /// Publish `loading`, then fetch on the runtime. A fetch still in
    /// flight is aborted; the newest fetch always wins.
    fn start_fetch(self: &Arc<Self>) {
        let mut state = self.state.lock();
        if state.destroyed {
            return;
        }

        state.generation += 1;
        let generation = state.generation;
        if let Some(previous) = state.fetch.take() {
            if !previous.is_finished() {
                tracing::debug!(generation, "Superseding in-flight fetch");
            }
            previous.abort();
        }

        if let Some(view_model) = &state.view_model {
            view_model.set_loading(true);
        }

        tracing::debug!(generation, batch_size = self.batch_size, "Fetching dogs");
        let inner = Arc::clone(self);
        state.fetch = Some(tokio::spawn(async move {
            let result = inner.repository.get_random_dogs(inner.batch_size).await;
            inner.complete_fetch(generation, result);
        }));
    }

    /// Publish to whichever view is attached now, not the one that was
    /// attached when the fetch started.
    fn complete_fetch(&self, generation: u64, result: Result<Vec<Dog>, FetchError>) {
        let mut state = self.state.lock();
        if state.destroyed || state.generation != generation {
            tracing::debug!(generation, "Discarding superseded fetch result");
            return;
        }
        state.fetch = None;

        let dogs = match result {
            Ok(dogs) => {
                tracing::info!(count = dogs.len(), "Loaded dogs");
                state.cache = dogs.clone();
                dogs
            }
            Err(err) => {
                tracing::error!(error = %err, kind = err.kind(), "Could not load dog pictures");
                Vec::new()
            }
        };

        if let Some(view_model) = &state.view_model {
            view_model.set_dogs(dogs);
            view_model.set_loading(false);
        }
    }
}

//! Observable state for the dogs list.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::Dog;

/// Holds what the dogs list shows: the dogs and whether a load is running.
///
/// Each field is observed on its own through a `watch` receiver. The
/// model is owned by the UI session rather than by any single view, so a
/// view can be torn down and re-attached without losing it. Cloning shares
/// the same underlying state.
///
/// `loading` starts out unset (`None`); observers must not treat that as
/// either state.
#[derive(Clone)]
pub struct DogsListViewModel {
    inner: Arc<ViewModelInner>,
}

struct ViewModelInner {
    dogs: watch::Sender<Vec<Dog>>,
    loading: watch::Sender<Option<bool>>,
}

impl DogsListViewModel {
    pub fn new() -> Self {
        let (dogs, _) = watch::channel(Vec::new());
        let (loading, _) = watch::channel(None);
        Self {
            inner: Arc::new(ViewModelInner { dogs, loading }),
        }
    }

    /// Observe the dogs list.
    pub fn dogs(&self) -> watch::Receiver<Vec<Dog>> {
        self.inner.dogs.subscribe()
    }

    /// Observe the loading flag.
    pub fn is_loading(&self) -> watch::Receiver<Option<bool>> {
        self.inner.loading.subscribe()
    }

    pub fn set_dogs(&self, dogs: Vec<Dog>) {
        self.inner.dogs.send_replace(dogs);
    }

    pub fn set_loading(&self, loading: bool) {
        self.inner.loading.send_replace(Some(loading));
    }

    pub fn current_dogs(&self) -> Vec<Dog> {
        self.inner.dogs.borrow().clone()
    }

    pub fn current_loading(&self) -> Option<bool> {
        *self.inner.loading.borrow()
    }
}

impl Default for DogsListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

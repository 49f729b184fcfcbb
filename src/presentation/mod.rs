//! Presentation layer for the dogs list.
//!
//! ```text
//! ReloadClicks ──→ Debouncer ──→ DogsListPresenter ──→ DogRepository
//!                                      │
//!                                      ▼
//!                              DogsListViewModel ──→ view
//! ```

mod debounce;
mod presenter;
mod view;
mod view_model;

pub use debounce::Debouncer;
pub use presenter::DogsListPresenter;
pub use view::{DogsListView, ReloadClick, ReloadClicks};
pub use view_model::DogsListViewModel;

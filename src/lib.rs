//! Random dog pictures in the terminal.
//!
//! Layers, leaf to root:
//!
//! - [`api`]: HTTP client for the dog service
//! - [`repository`]: maps service payloads to dogs or a [`repository::FetchError`]
//! - [`presentation`]: debounced reload pipeline, cache and observable state
//! - [`ui`]: ratatui view bound to the presentation state

pub mod api;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod repository;
pub mod shutdown;
pub mod ui;

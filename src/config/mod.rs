//! Configuration loading and validation.
//!
//! Configuration is read once at startup and passed down explicitly.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, PresenterConfig, UiConfig};

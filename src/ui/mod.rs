//! Terminal view for the dogs list.
//!
//! Renders the view model with ratatui and turns key presses into reload
//! clicks and list navigation.

pub mod app;
pub mod dogs;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote dog service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "https://api.thedogapi.co.uk").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Presenter-wide behavior shared by every list screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Reload clicks closer together than this collapse into one fetch.
    #[serde(default = "default_click_debounce_ms")]
    pub click_debounce_ms: u64,
    /// Number of dogs requested per fetch (1..=20).
    #[serde(default = "default_batch_size")]
    pub batch_size: u8,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds when no input arrives.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://api.thedogapi.co.uk".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_click_debounce_ms() -> u64 {
    150
}

fn default_batch_size() -> u8 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            click_debounce_ms: default_click_debounce_ms(),
            batch_size: default_batch_size(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

//! # Stagehand Configuration
//!
//! Layered configuration built on [figment](https://docs.rs/figment):
//! hard-coded defaults, then `stagehand.toml` and `.stagehand/config.*` in the
//! working directory, then `STAGEHAND_*` environment variables.
//!
//! ```no_run
//! use stagehand_config::load_config;
//!
//! let config = load_config().unwrap();
//! println!("calendar shows {} days", config.calendar.window_days);
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use error::ConfigError;
pub use provider::ConfigProvider;
pub use types::{AiSettings, ArtistSettings, CalendarSettings, LoggingSettings, StagehandConfig};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load configuration from the current directory and environment
pub fn load_config() -> ConfigResult<StagehandConfig> {
    ConfigProvider::new().load()
}

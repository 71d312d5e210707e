//! Configuration values

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Longest calendar window the dashboard will lay out
pub const MAX_WINDOW_DAYS: u32 = 31;

/// Levels the logging filter accepts
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagehandConfig {
    pub artist: ArtistSettings,
    pub ai: AiSettings,
    pub calendar: CalendarSettings,
    pub logging: LoggingSettings,
}

impl StagehandConfig {
    /// Check value ranges that the type system cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar.window_days == 0 || self.calendar.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::invalid_value(
                "calendar.window_days",
                format!("must be between 1 and {MAX_WINDOW_DAYS}"),
            ));
        }
        if self.ai.timeout_secs == 0 {
            return Err(ConfigError::invalid_value("ai.timeout_secs", "must be greater than 0"));
        }
        if self.ai.model.trim().is_empty() {
            return Err(ConfigError::invalid_value("ai.model", "must not be empty"));
        }
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid_value(
                "logging.level",
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Copy safe to print: the API key is masked
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.ai.api_key = self.ai.masked_key();
        copy
    }
}

/// Who the generated ideas are for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistSettings {
    pub name: String,
    pub style: String,
    /// Audience the artist is trying to reach
    pub market: String,
}

impl Default for ArtistSettings {
    fn default() -> Self {
        Self {
            name: "Kannawey".to_string(),
            style: "synth-pop mixed with modern electronic music".to_string(),
            market: "Venezuela and the Venezuelan diaspora".to_string(),
        }
    }
}

/// Generative model access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AiSettings {
    /// The key with all but its last four characters hidden. Short keys are
    /// hidden entirely.
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                return "****".to_string();
            }
            let visible = chars.len().saturating_sub(4);
            let tail: String = chars[visible..].iter().collect();
            format!("{}{}", "*".repeat(visible.min(8)), tail)
        })
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    /// Days shown starting at today
    pub window_days: u32,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self { window_days: 7 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

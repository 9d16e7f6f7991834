//! Presentation timing and routing configuration.
//!
//! Core never sleeps. These values are handed to the UI shell or CLI, which
//! own the timers that model typing and redirect latency.

use crate::logging::{default_log_level, LogLevel};
use crate::scan::interpreter::{ScanInterpreter, DEFAULT_TRACKING_PATH};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for any configured artificial delay.
pub const MAX_DELAY_MS: u64 = 10_000;

const DEFAULT_REPLY_DELAY_MS: u64 = 1_000;
const DEFAULT_SCAN_REDIRECT_DELAY_MS: u64 = 1_500;
const DEFAULT_TRACK_LOOKUP_DELAY_MS: u64 = 1_000;

/// Runtime knobs for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Delay between a user message and the assistant reply.
    pub reply_delay_ms: u64,
    /// Delay before auto-navigating after a tracking-shaped scan.
    pub scan_redirect_delay_ms: u64,
    /// Simulated lookup latency of the tracking view.
    pub track_lookup_delay_ms: u64,
    /// Router path of the tracking view.
    pub tracking_path: String,
    pub log_level: LogLevel,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            scan_redirect_delay_ms: DEFAULT_SCAN_REDIRECT_DELAY_MS,
            track_lookup_delay_ms: DEFAULT_TRACK_LOOKUP_DELAY_MS,
            tracking_path: DEFAULT_TRACKING_PATH.to_string(),
            log_level: default_log_level(),
        }
    }
}

impl CoreConfig {
    /// Same config with every delay set to zero.
    pub fn without_delays(mut self) -> Self {
        self.reply_delay_ms = 0;
        self.scan_redirect_delay_ms = 0;
        self.track_lookup_delay_ms = 0;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("reply_delay_ms", self.reply_delay_ms),
            ("scan_redirect_delay_ms", self.scan_redirect_delay_ms),
            ("track_lookup_delay_ms", self.track_lookup_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::DelayTooLong { name, value });
            }
        }
        if !self.tracking_path.starts_with('/') {
            return Err(ConfigError::InvalidTrackingPath(self.tracking_path.clone()));
        }
        Ok(())
    }

    /// Parses a JSON config document and validates it.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or wrongly typed values.
    /// - Any [`CoreConfig::validate`] error.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Scan interpreter routed to the configured tracking path.
    pub fn scan_interpreter(&self) -> ScanInterpreter {
        ScanInterpreter::new(self.tracking_path.clone())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    DelayTooLong { name: &'static str, value: u64 },
    InvalidTrackingPath(String),
    Parse(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DelayTooLong { name, value } => {
                write!(f, "{name} is {value} ms; maximum is {MAX_DELAY_MS} ms")
            }
            Self::InvalidTrackingPath(value) => {
                write!(f, "tracking path must start with `/`, got `{value}`")
            }
            Self::Parse(message) => write!(f, "invalid config document: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use crate::logging::LogLevel;

    #[test]
    fn defaults_are_valid() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reply_delay_ms, 1_000);
        assert_eq!(config.scan_redirect_delay_ms, 1_500);
        assert_eq!(config.tracking_path, "/track");
    }

    #[test]
    fn rejects_long_delay_and_relative_path() {
        let mut config = CoreConfig::default();
        config.reply_delay_ms = 60_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DelayTooLong {
                name: "reply_delay_ms",
                ..
            })
        ));

        let mut config = CoreConfig::default();
        config.tracking_path = "track".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTrackingPath("track".to_string()))
        );
    }

    #[test]
    fn without_delays_zeroes_timers() {
        let config = CoreConfig::default().without_delays();
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.scan_redirect_delay_ms, 0);
        assert_eq!(config.track_lookup_delay_ms, 0);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_keys() {
        let config = CoreConfig::from_json_str(
            r#"{"reply_delay_ms": 250, "tracking_path": "/parcels", "log_level": "debug"}"#,
        )
        .expect("partial config should load");
        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.tracking_path, "/parcels");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.scan_redirect_delay_ms, 1_500);
        assert_eq!(config.track_lookup_delay_ms, 1_000);

        let empty = CoreConfig::from_json_str("{}").expect("empty object should load");
        assert_eq!(empty, CoreConfig::default());
    }

    #[test]
    fn json_loading_rejects_bad_path_and_malformed_documents() {
        assert_eq!(
            CoreConfig::from_json_str(r#"{"tracking_path": "track"}"#),
            Err(ConfigError::InvalidTrackingPath("track".to_string()))
        );
        assert!(matches!(
            CoreConfig::from_json_str(r#"{"reply_delay_ms": "soon"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CoreConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}

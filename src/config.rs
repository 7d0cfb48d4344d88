//! Field configuration
//!
//! Settings are read from environment variables, falling back to defaults.

use std::time::Duration;
use thiserror::Error;

pub const NOTICE_DURATION_ENV: &str = "PWD_NOTICE_DURATION_MS";
pub const NOTICE_MESSAGE_ENV: &str = "PWD_NOTICE_MESSAGE";
pub const MASK_CHAR_ENV: &str = "PWD_MASK_CHAR";

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(1400);
pub const DEFAULT_NOTICE_MESSAGE: &str = "copy pasting is not allowed🎃";
pub const DEFAULT_MASK_CHAR: char = '•';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid notice duration {value:?}: {source}")]
    InvalidDuration {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("Notice duration must be greater than zero")]
    ZeroDuration,
    #[error("Mask must be exactly one character, got {0:?}")]
    InvalidMask(String),
}

/// Settings for a [`PasswordField`](crate::PasswordField).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// How long a blocked-clipboard notice stays visible.
    pub notice_duration: Duration,
    pub notice_message: String,
    /// Character shown in place of each password character while hidden.
    pub mask_char: char,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            notice_duration: DEFAULT_NOTICE_DURATION,
            notice_message: DEFAULT_NOTICE_MESSAGE.to_string(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl FieldConfig {
    /// Builds the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_NOTICE_DURATION_MS`: notice lifetime in milliseconds (default 1400)
    /// - `PWD_NOTICE_MESSAGE`: notice text
    /// - `PWD_MASK_CHAR`: single mask character (default `•`)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The duration is not an integer
    /// - The duration is zero
    /// - The mask is not exactly one character
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(NOTICE_DURATION_ENV) {
            config.notice_duration = parse_duration(&value)?;
        }

        if let Ok(message) = std::env::var(NOTICE_MESSAGE_ENV) {
            if !message.trim().is_empty() {
                config.notice_message = message;
            }
        }

        if let Ok(mask) = std::env::var(MASK_CHAR_ENV) {
            config.mask_char = parse_mask(&mask)?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            notice_ms = config.notice_duration.as_millis() as u64,
            "field configuration loaded"
        );

        Ok(config)
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    pub fn with_notice_message(mut self, message: impl Into<String>) -> Self {
        self.notice_message = message.into();
        self
    }

    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }
}

fn parse_duration(value: &str) -> Result<Duration, ConfigError> {
    let millis: u64 = value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidDuration {
            value: value.to_string(),
            source,
        })?;
    if millis == 0 {
        return Err(ConfigError::ZeroDuration);
    }
    Ok(Duration::from_millis(millis))
}

fn parse_mask(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidMask(value.to_string())),
    }
}

use std::env;
use std::time::Duration;

use quiz_core::{DEFAULT_ROLLING_WINDOW, DisplayPrecision};

use crate::error::ConfigError;
use crate::retry::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How statistics are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub precision: DisplayPrecision,
    pub rolling_window: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            precision: DisplayPrecision::default(),
            rolling_window: DEFAULT_ROLLING_WINDOW,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub retry: RetryPolicy,
    pub request_timeout: Duration,
    pub display: DisplaySettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            retry: RetryPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            display: DisplaySettings::default(),
        }
    }
}

impl ClientConfig {
    /// Read `QUIZ_*` variables from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a value is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("QUIZ_BASE_URL") {
            config.base_url = parse_base_url("QUIZ_BASE_URL", &base_url)?;
        }
        if let Some(raw) = lookup("QUIZ_RETRIES") {
            config.retry.retries = parse_number("QUIZ_RETRIES", &raw)?;
        }
        if let Some(raw) = lookup("QUIZ_RETRY_DELAY_MS") {
            config.retry.delay = Duration::from_millis(parse_number("QUIZ_RETRY_DELAY_MS", &raw)?);
        }
        if let Some(raw) = lookup("QUIZ_DISPLAY_DECIMALS") {
            config.display.precision = parse_precision("QUIZ_DISPLAY_DECIMALS", &raw)?;
        }
        if let Some(raw) = lookup("QUIZ_ROLLING_WINDOW") {
            config.display.rolling_window = parse_window("QUIZ_ROLLING_WINDOW", &raw)?;
        }

        Ok(config)
    }
}

/// Trim and validate a backend base URL.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` for empty or non-HTTP values.
pub fn parse_base_url(key: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_string());
    }
    Err(invalid(key, raw))
}

/// # Errors
///
/// Returns `ConfigError::Invalid` if `raw` is not a non-negative integer.
pub fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

/// # Errors
///
/// Returns `ConfigError::Invalid` unless `raw` is `0` or `2`.
pub fn parse_precision(key: &'static str, raw: &str) -> Result<DisplayPrecision, ConfigError> {
    parse_number::<u8>(key, raw)
        .ok()
        .and_then(DisplayPrecision::from_decimals)
        .ok_or_else(|| invalid(key, raw))
}

/// # Errors
///
/// Returns `ConfigError::Invalid` unless `raw` is a positive integer.
pub fn parse_window(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match parse_number::<usize>(key, raw)? {
        0 => Err(invalid(key, raw)),
        window => Ok(window),
    }
}

fn invalid(key: &'static str, raw: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: raw.to_string(),
    }
}

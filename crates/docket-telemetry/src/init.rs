//! Telemetry initialisation primitives and logging configuration.
//!
//! # Design
//! - Centralises logging setup (fmt or JSON) with a single entry point.
//! - Reads level and format from the environment so pipeline binaries share one convention.
//! - `RUST_LOG` still wins over the configured level when present.

use std::borrow::Cow;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, TelemetryError};

/// Default logging target when `RUST_LOG` is not provided.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Environment variable holding the log level (e.g. `debug`).
pub const LOG_LEVEL_ENV: &str = "DOCKET_LOG_LEVEL";
/// Environment variable holding the log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "DOCKET_LOG_FORMAT";

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be installed (for example,
/// because another subscriber has already been set globally).
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    let filter = build_env_filter(&config.level);
    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .try_init(),
    };
    installed.map_err(|source| TelemetryError::SubscriberInstall { source })
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Log level string (e.g., `info`, `debug`).
    pub level: Cow<'a, str>,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: Cow::Borrowed(DEFAULT_LOG_LEVEL),
            format: LogFormat::infer(),
        }
    }
}

impl LoggingConfig<'static> {
    /// Build the configuration from `DOCKET_LOG_LEVEL` and `DOCKET_LOG_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::UnknownLogFormat`] when the format variable is set
    /// to something other than `json` or `pretty`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing or blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::UnknownLogFormat`] for unrecognised formats.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = non_blank(lookup(LOG_LEVEL_ENV)) {
            config.level = Cow::Owned(level);
        }
        if let Some(format) = non_blank(lookup(LOG_FORMAT_ENV)) {
            config.format = LogFormat::parse(&format)?;
        }
        Ok(config)
    }

    /// Build the configuration from a settings map with optional `log_level`
    /// and `log_format` keys, as embedded in pipeline configuration documents.
    ///
    /// Missing keys fall back to the defaults; an unknown format falls back to
    /// [`LogFormat::infer`].
    #[must_use]
    pub fn from_config(config: Option<&serde_json::Value>) -> Self {
        let mut logging = Self::default();
        if let Some(level) = config
            .and_then(|value| value.get("log_level"))
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|level| !level.is_empty())
        {
            logging.level = Cow::Owned(level.to_string());
        }
        if let Some(format) = log_format_from_config(config) {
            logging.format = format;
        }
        logging
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable logs.
    Pretty,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Parse a format name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::UnknownLogFormat`] for anything but `json` or `pretty`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(TelemetryError::UnknownLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

fn log_format_from_config(config: Option<&serde_json::Value>) -> Option<LogFormat> {
    config
        .and_then(|value| value.get("log_format"))
        .and_then(serde_json::Value::as_str)
        .map(|value| LogFormat::parse(value).unwrap_or_else(|_| LogFormat::infer()))
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

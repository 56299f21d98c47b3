//! Structured logging setup.
//!
//! Logs always go to stderr so they never interleave with command output on
//! stdout. `RUST_LOG`, when set and valid, overrides the configured level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// One step more verbose, saturating at `Trace`.
    pub fn more_verbose(&self) -> Self {
        match self {
            Self::Error => Self::Warn,
            Self::Warn => Self::Info,
            Self::Info => Self::Debug,
            Self::Debug | Self::Trace => Self::Trace,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LoggingError::UnknownLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines (for terminals).
    #[default]
    Human,
    /// One JSON object per line (for log aggregation).
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "compact" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

/// Logging errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    #[error("unknown log format '{0}'")]
    UnknownFormat(String),

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// The `[logging]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Set the level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// The filter directive to use, given the value of `RUST_LOG` if any.
    pub fn directive(&self, rust_log: Option<&str>) -> String {
        match rust_log.map(str::trim) {
            Some(env) if !env.is_empty() => env.to_string(),
            _ => self.level.as_directive().to_string(),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directive = self.directive(rust_log.as_deref());
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Human => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(
            "loud".parse::<LogLevel>(),
            Err(LoggingError::UnknownLevel("loud".into()))
        );
    }

    #[test]
    fn test_level_ordering_and_verbosity() {
        assert!(LogLevel::Trace < LogLevel::Error);
        assert_eq!(LogLevel::Warn.more_verbose(), LogLevel::Info);
        assert_eq!(LogLevel::Trace.more_verbose(), LogLevel::Trace);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_directive_prefers_rust_log() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        assert_eq!(config.directive(None), "debug");
        assert_eq!(config.directive(Some("  ")), "debug");
        assert_eq!(config.directive(Some("eco_commerce=trace")), "eco_commerce=trace");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        assert!(matches!(init(&config), Err(LoggingError::Init(_))));
    }
}

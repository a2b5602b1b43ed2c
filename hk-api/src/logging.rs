//! Logging setup for applications using this crate
//!
//! The library only emits `tracing` events. Applications that want to see
//! them can install a subscriber through this module or bring their own.
//! Output goes to stderr so it never mixes with receiver replies printed on
//! stdout.

use std::io;

use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Selects the output mode
pub const MODE_ENV: &str = "HK_LOG_MODE";
/// Filter directive that overrides the mode's default level
pub const LEVEL_ENV: &str = "HK_LOG_LEVEL";

/// How much the installed subscriber prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingMode {
    /// No subscriber is installed
    #[default]
    Silent,
    /// One line per event at info level
    Development,
    /// Multi-line events with source locations at debug level
    Debug,
}

impl LoggingMode {
    /// Parse a mode name; unknown names are Silent
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => LoggingMode::Development,
            "debug" => LoggingMode::Debug,
            _ => LoggingMode::Silent,
        }
    }

    fn default_level(self) -> Option<&'static str> {
        match self {
            LoggingMode::Silent => None,
            LoggingMode::Development => Some("info"),
            LoggingMode::Debug => Some("debug"),
        }
    }

    fn output_layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = fmt::layer().with_writer(io::stderr);
        match self {
            LoggingMode::Debug => layer
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .boxed(),
            _ => layer.compact().with_target(false).boxed(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to install tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a global subscriber for the given mode
///
/// The level comes from `HK_LOG_LEVEL`, then `RUST_LOG`, then the mode's
/// default. Silent installs nothing. Fails if a subscriber is already set.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    let Some(default_level) = mode.default_level() else {
        return Ok(());
    };

    let directive = level_directive(
        std::env::var(LEVEL_ENV).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        default_level,
    );

    Registry::default()
        .with(mode.output_layer())
        .with(EnvFilter::new(directive))
        .try_init()
        .map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Install a subscriber for the mode named in `HK_LOG_MODE`
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var(MODE_ENV)
        .map(|name| LoggingMode::from_name(&name))
        .unwrap_or_default();
    init_logging(mode)
}

fn level_directive(level: Option<String>, rust_log: Option<String>, default_level: &str) -> String {
    level
        .or(rust_log)
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| default_level.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_silent_mode_installs_nothing() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
        assert_eq!(LoggingMode::default(), LoggingMode::Silent);
    }

    #[rstest]
    #[case("development", LoggingMode::Development)]
    #[case("dev", LoggingMode::Development)]
    #[case(" Debug ", LoggingMode::Debug)]
    #[case("loud", LoggingMode::Silent)]
    #[case("", LoggingMode::Silent)]
    fn test_mode_from_name(#[case] name: &str, #[case] mode: LoggingMode) {
        assert_eq!(LoggingMode::from_name(name), mode);
    }

    #[test]
    fn test_level_directive_precedence() {
        let hk = Some("socket_client=trace".to_string());
        let rust_log = Some("warn".to_string());

        assert_eq!(level_directive(hk.clone(), rust_log.clone(), "info"), "socket_client=trace");
        assert_eq!(level_directive(None, rust_log, "info"), "warn");
        assert_eq!(level_directive(None, None, "debug"), "debug");
        assert_eq!(level_directive(Some("  ".to_string()), None, "info"), "info");
    }
}

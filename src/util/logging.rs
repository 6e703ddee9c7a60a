//! Structured logging setup for gatusgen
//!
//! Logging uses the `tracing` ecosystem. Output goes to standard error, as
//! plain text by default or JSON when requested, filtered by the configured level
//! unless `RUST_LOG` is set.
//!
//! # Example
//!
//! ```no_run
//! use gatusgen::util::logging;
//! use tracing::{info, warn};
//!
//! logging::init_logging(logging::config_from_env());
//!
//! info!(apps_dir = "apps", "Scanning manifests");
//! warn!(path = "apps/bad.yaml", "Failed to load manifest");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., gatusgen::pipeline) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: false,
            include_location: false,
        }
    }
}

/// Parses a log level from a string, falling back to `INFO`
///
/// ```
/// use gatusgen::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("loud"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Builds the filter: `RUST_LOG` when set, otherwise the configured level for this crate.
fn build_filter(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    if env::var("RUST_LOG").is_ok() {
        return filter;
    }

    match format!("{}={}", crate::NAME, level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Initializes the logging system. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        let result = if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("Logging already initialized: {}", err);
        }
    });
}

/// Reads `GATUSGEN_LOG_LEVEL` and `GATUSGEN_LOG_JSON`.
pub fn config_from_env() -> LoggingConfig {
    let level_str = env::var("GATUSGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let use_json = env::var("GATUSGEN_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    LoggingConfig {
        level: parse_level(&level_str),
        use_json,
        ..Default::default()
    }
}

//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::LoggingConfig;

/// How log lines are filtered and formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Start from the configured logging section.
    pub fn from_logging(logging: &LoggingConfig) -> Self {
        Self {
            log_level: logging.level().clone(),
            json_logs: *logging.json(),
        }
    }

    /// Force debug output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs |= enabled;
        self
    }

    /// `RUST_LOG` when set, the configured level otherwise.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::from_logging(&LoggingConfig::default())
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_observability(
    config: &ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(config.filter());

    if config.json_logs {
        registry.with(fmt::layer().json().with_target(true)).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(false)).try_init()?;
    }

    Ok(())
}

//! Layered application configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`deckhand.toml` shipped with the binary)
//! 2. `~/.config/deckhand/deckhand.toml`
//! 3. `./deckhand.toml`
//! 4. A file named on the command line
//! 5. `DECKHAND_HOST`, `DECKHAND_PORT` and `DECKHAND_MODEL`
//!
//! The Gemini API key is never read from files; it comes from `GEMINI_API_KEY`.

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use deckhand_error::{ConfigError, DeckhandError, DeckhandResult};
use deckhand_layout::{DEFAULT_WATERMARK, Theme};
use deckhand_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use deckhand_server::ServerConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../deckhand.toml");

/// Environment variables that override single keys.
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("DECKHAND_HOST", "server.host"),
    ("DECKHAND_PORT", "server.port"),
    ("DECKHAND_MODEL", "oracle.model"),
];

/// Text oracle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct OracleConfig {
    /// Gemini model identifier
    #[serde(default = "default_model")]
    model: String,
    /// REST base URL
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Per-request timeout in seconds
    #[serde(default)]
    timeout_secs: Option<u64>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl OracleConfig {
    /// Client settings without an API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings cannot be assembled.
    pub fn gemini_config(&self) -> DeckhandResult<GeminiConfig> {
        GeminiConfig::builder()
            .model(self.model.clone())
            .base_url(self.base_url.trim_end_matches('/').to_string())
            .timeout(self.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| {
                DeckhandError::from(ConfigError::new(format!("Invalid oracle settings: {e}")))
            })
    }
}

/// Slide rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LayoutConfig {
    /// Text of the corner watermark
    #[serde(default = "default_watermark")]
    watermark: String,
}

fn default_watermark() -> String {
    DEFAULT_WATERMARK.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            watermark: default_watermark(),
        }
    }
}

impl LayoutConfig {
    /// The default theme with the configured watermark.
    pub fn theme(&self) -> Theme {
        Theme::default().with_watermark(self.watermark.clone())
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Everything the binary reads from configuration files.
///
/// # Examples
///
/// ```
/// use deckhand::DeckhandConfig;
///
/// let config = DeckhandConfig::bundled().unwrap();
/// assert_eq!(config.server().port, 5000);
/// assert_eq!(config.oracle().model(), "gemini-2.0-flash");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct DeckhandConfig {
    /// Listen address
    #[serde(default)]
    server: ServerConfig,
    /// Text oracle
    #[serde(default)]
    oracle: OracleConfig,
    /// Slide rendering
    #[serde(default)]
    layout: LayoutConfig,
    /// Log output
    #[serde(default)]
    logging: LoggingConfig,
}

impl DeckhandConfig {
    /// Load every layer, optionally ending with an explicit file.
    ///
    /// Missing user files are skipped; a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file cannot be read or a value
    /// has the wrong type.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> DeckhandResult<Self> {
        debug!("Loading configuration");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/deckhand/deckhand.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("deckhand").required(false));

        Self::finish(builder, explicit, |key| std::env::var(key).ok())
    }

    /// Bundled defaults overlaid with one file, ignoring user files and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> DeckhandResult<Self> {
        Self::finish(Self::defaults(), Some(path.as_ref()), |_| None)
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bundled file is malformed.
    pub fn bundled() -> DeckhandResult<Self> {
        Self::finish(Self::defaults(), None, |_| None)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(
        mut builder: ConfigBuilder<DefaultState>,
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> DeckhandResult<Self> {
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        for (var, key) in ENV_OVERRIDES {
            if let Some(value) = env(var) {
                debug!(var, key, "Applying environment override");
                builder = builder
                    .set_override(key, value)
                    .map_err(|e| ConfigError::new(format!("Invalid override {var}: {e}")))?;
            }
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {e}")))?
            .try_deserialize()
            .map_err(|e| {
                DeckhandError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {e}"
                )))
            })
    }

    /// Replace the listen address.
    pub fn with_server(mut self, server: ServerConfig) -> Self {
        self.server = server;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn bundled_matches_built_in_defaults() {
        let bundled = DeckhandConfig::bundled().unwrap();
        assert_eq!(bundled, DeckhandConfig::default());
    }

    #[test]
    fn environment_overrides_win() {
        let config = DeckhandConfig::finish(
            DeckhandConfig::defaults(),
            None,
            env_of(&[
                ("DECKHAND_HOST", "0.0.0.0"),
                ("DECKHAND_PORT", "8080"),
                ("DECKHAND_MODEL", "gemini-2.5-pro"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.oracle().model(), "gemini-2.5-pro");
    }

    #[test]
    fn non_numeric_port_is_a_config_error() {
        let err = DeckhandConfig::finish(
            DeckhandConfig::defaults(),
            None,
            env_of(&[("DECKHAND_PORT", "eighty")]),
        )
        .unwrap_err();
        assert!(matches!(
            err.kind(),
            deckhand_error::DeckhandErrorKind::Config(_)
        ));
    }

    #[test]
    fn gemini_config_carries_timeout_and_trims_base_url() {
        let oracle = OracleConfig {
            model: "m".to_string(),
            base_url: "http://localhost:9/v1beta/".to_string(),
            timeout_secs: Some(5),
        };
        let gemini = oracle.gemini_config().unwrap();
        assert_eq!(gemini.base_url(), "http://localhost:9/v1beta");
        assert_eq!(*gemini.timeout(), Some(Duration::from_secs(5)));
        assert!(gemini.api_key().is_none());
    }

    #[test]
    fn layout_theme_uses_watermark() {
        let layout = LayoutConfig {
            watermark: "Acme".to_string(),
        };
        assert_eq!(layout.theme().watermark(), "Acme");
    }
}

//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `staffdir.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Staff-directory server settings.
    pub server: ServerConfig,
    /// HTTP client settings.
    pub http: HttpConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Server the client talks to.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Scheme and authority of the API gateway.
    pub base_url: String,
    /// Service segment of the routed path.
    pub service: String,
}

/// HTTP client tuning.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// TCP connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `staffdir.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("staffdir.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("STAFFDIR_BASE_URL") {
            self.server.base_url = val;
        }
        if let Ok(val) = std::env::var("STAFFDIR_SERVICE") {
            self.server.service = val;
        }
        if let Ok(val) = std::env::var("STAFFDIR_CONNECT_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.http.connect_timeout_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("STAFFDIR_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "base_url must not be empty".to_string(),
            ));
        }
        if self.server.service.is_empty() {
            return Err(ConfigError::Validation(
                "service must not be empty".to_string(),
            ));
        }
        if self.http.connect_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "connect_timeout_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            service: "employee".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 10_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "staffdirctl=info,staffdir=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

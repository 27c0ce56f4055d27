//! Configuration management.
//!
//! Configuration is layered: built-in defaults, then a TOML file, then
//! `CONTEXT_MCP_*` environment variables. Every file field is optional.
//!
//! ```toml
//! [server]
//! rate_limit_max_requests = 1000
//! rate_limit_window_secs = 60
//! max_request_bytes = 1048576
//!
//! [logging]
//! level = "info"
//! format = "json"
//! file = "/tmp/context-mcp.log"
//!
//! [metrics]
//! enabled = true
//! port = 9090
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "context-engineering-mcp";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default maximum requests per rate-limit window.
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: usize = 1000;

/// Default rate-limit window in seconds.
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Default maximum size of one JSON-RPC request line (1 MiB).
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 1024 * 1024;

/// Default Prometheus exporter port.
pub const DEFAULT_METRICS_PORT: u16 = 9090;

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Request handling limits.
    pub server: ServerSettings,
    /// Log output.
    pub logging: LoggingSettings,
    /// Metrics exporter.
    pub metrics: MetricsSettings,
}

/// Request handling limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    /// Maximum requests per window.
    pub rate_limit_max_requests: usize,
    /// Window length in seconds.
    pub rate_limit_window_secs: u64,
    /// Maximum bytes in a single request line.
    pub max_request_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            rate_limit_max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            rate_limit_window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when no log env var is set.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
    /// Log file; stderr when absent.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Metrics exporter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSettings {
    /// Whether the Prometheus exporter is installed.
    pub enabled: bool,
    /// Exporter listen port.
    pub port: u16,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            port: DEFAULT_METRICS_PORT,
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Server section.
    pub server: Option<ConfigFileServer>,
    /// Logging section.
    pub logging: Option<ConfigFileLogging>,
    /// Metrics section.
    pub metrics: Option<ConfigFileMetrics>,
}

/// Server section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileServer {
    /// Max requests per window.
    pub rate_limit_max_requests: Option<usize>,
    /// Window in seconds.
    pub rate_limit_window_secs: Option<u64>,
    /// Max request bytes.
    pub max_request_bytes: Option<usize>,
}

/// Logging section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLogging {
    /// Filter directive.
    pub level: Option<String>,
    /// Output format.
    pub format: Option<String>,
    /// Log file path.
    pub file: Option<String>,
}

/// Metrics section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileMetrics {
    /// Exporter enabled.
    pub enabled: Option<bool>,
    /// Exporter port.
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::parse_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn parse_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Returns the platform config file path, if a home directory is known.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default location.
    ///
    /// Returns defaults if no config file exists or it cannot be parsed.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        Self::load_from_file(&path).unwrap_or_else(|e| {
            // Logging is not initialized yet
            eprintln!("Ignoring config file {}: {e}", path.display());
            Self::default()
        })
    }

    /// Loads configuration from `path`, or the default location when `None`,
    /// then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Applies `CONTEXT_MCP_*` environment variables.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup, keyed by env var name.
    ///
    /// Unparseable numeric or boolean values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("CONTEXT_MCP_RATE_LIMIT_MAX_REQUESTS").and_then(|v| v.parse().ok())
        {
            self.server.rate_limit_max_requests = v;
        }
        if let Some(v) = lookup("CONTEXT_MCP_RATE_LIMIT_WINDOW_SECS").and_then(|v| v.parse().ok())
        {
            self.server.rate_limit_window_secs = v;
        }
        if let Some(v) = lookup("CONTEXT_MCP_MAX_REQUEST_BYTES").and_then(|v| v.parse().ok()) {
            self.server.max_request_bytes = v;
        }
        if let Some(v) = lookup("CONTEXT_MCP_LOG_FORMAT") {
            self.logging.format = v;
        }
        if let Some(v) = lookup("CONTEXT_MCP_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("CONTEXT_MCP_METRICS_ENABLED").and_then(|v| parse_bool(&v)) {
            self.metrics.enabled = v;
        }
        if let Some(v) = lookup("CONTEXT_MCP_METRICS_PORT").and_then(|v| v.parse().ok()) {
            self.metrics.port = v;
        }
        self
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::OperationFailed {
            operation: "serialize_config".to_string(),
            cause: e.to_string(),
        })
    }

    /// Converts a `ConfigFile` to `ServerConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(server) = file.server {
            if let Some(v) = server.rate_limit_max_requests {
                config.server.rate_limit_max_requests = v;
            }
            if let Some(v) = server.rate_limit_window_secs {
                config.server.rate_limit_window_secs = v;
            }
            if let Some(v) = server.max_request_bytes {
                config.server.max_request_bytes = v;
            }
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                config.logging.level = level;
            }
            if let Some(format) = logging.format {
                config.logging.format = format;
            }
            config.logging.file = logging.file.map(PathBuf::from);
        }
        if let Some(metrics) = file.metrics {
            if let Some(enabled) = metrics.enabled {
                config.metrics.enabled = enabled;
            }
            if let Some(port) = metrics.port {
                config.metrics.port = port;
            }
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive; takes precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "CONTEXT_MCP_LOG";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name; anything other than `json` is pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Line format.
    pub format: LogFormat,
    /// Log file; stderr when absent.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Builds logging configuration from settings with env overrides.
    ///
    /// The filter comes from `CONTEXT_MCP_LOG`, then `RUST_LOG`, then `debug`
    /// when `verbose` is set, then the configured level.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings, verbose: bool) -> Self {
        let directive = filter_directive(settings, verbose, |key| std::env::var(key).ok());

        Self {
            filter: EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info")),
            format: LogFormat::parse(&settings.format),
            file: settings.file.clone(),
        }
    }
}

/// Picks the filter directive from env, flags and settings.
fn filter_directive(
    settings: &LoggingSettings,
    verbose: bool,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    lookup(LOG_ENV)
        .or_else(|| lookup("RUST_LOG"))
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            if verbose {
                "debug".to_string()
            } else {
                settings.level.clone()
            }
        })
}

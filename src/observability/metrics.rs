//! Prometheus metrics.
//!
//! Counters are recorded with the `metrics` macros throughout the crate. They
//! are no-ops until a recorder is installed here.

use crate::config::MetricsSettings;
use crate::{Error, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Metrics configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Whether metrics are enabled.
    pub enabled: bool,
    /// Address to bind the metrics exporter.
    pub listen_addr: SocketAddr,
}

impl MetricsConfig {
    /// Builds metrics configuration from config settings.
    #[must_use]
    pub const fn from_settings(settings: &MetricsSettings) -> Self {
        Self {
            enabled: settings.enabled,
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), settings.port),
        }
    }
}

/// Installs the Prometheus recorder and its HTTP listener.
///
/// Returns `false` without installing anything when metrics are disabled.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or a recorder is already set.
pub fn install_prometheus(config: &MetricsConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .install()
        .map_err(|e| Error::OperationFailed {
            operation: "metrics_recorder_install".to_string(),
            cause: e.to_string(),
        })?;

    tracing::info!(addr = %config.listen_addr, "Prometheus exporter listening");
    Ok(true)
}

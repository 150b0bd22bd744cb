//! Configuration structures and their defaults.

use std::time::Duration;

use url::Url;

/// Default public hub endpoint.
pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";
/// Default records requested per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Upstream listing caps page size; larger requests are clamped.
pub const MAX_BATCH_SIZE: usize = 100;
/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream hub connection settings.
    pub hub: HubConfig,
    /// Logging/telemetry settings.
    pub telemetry: TelemetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hub: HubConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Upstream hub connection settings.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base URL of the hub; the catalog listing lives at `/api/models`.
    pub base_url: Url,
    /// Records requested per fetch. Also the short-batch threshold used for
    /// exhaustion detection.
    pub batch_size: usize,
    /// Per-request timeout applied at the HTTP client.
    pub request_timeout: Duration,
    /// User agent sent on every request.
    pub user_agent: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_HUB_URL).expect("default hub url is valid"),
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

/// Logging/telemetry settings.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `tracing_subscriber` env-filter directive, e.g. `info` or
    /// `hubtok_core=debug`.
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("hubtok/{}", env!("CARGO_PKG_VERSION"))
}

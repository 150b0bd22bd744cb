//! Environment-driven configuration loading.

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::models::{Config, HubConfig, MAX_BATCH_SIZE, TelemetryConfig};
use crate::validation::{ConfigWarning, ConfigWarnings};

/// Variable overriding the hub base URL.
pub const ENV_HUB_URL: &str = "HUBTOK_HUB_URL";
/// Variable overriding the per-fetch batch size.
pub const ENV_BATCH_SIZE: &str = "HUBTOK_BATCH_SIZE";
/// Variable overriding the request timeout, in seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "HUBTOK_REQUEST_TIMEOUT_SECS";
/// Variable overriding the outgoing user agent.
pub const ENV_USER_AGENT: &str = "HUBTOK_USER_AGENT";
/// Variable overriding the tracing filter directive.
pub const ENV_LOG: &str = "HUBTOK_LOG";

/// Errors raised while composing the configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The hub URL variable did not parse as a URL.
    #[error("invalid {var}: {source}")]
    InvalidHubUrl {
        /// The offending variable name.
        var: &'static str,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A numeric variable did not parse as a positive integer.
    #[error("invalid {var}: expected a positive integer, got {value:?}")]
    InvalidNumber {
        /// The offending variable name.
        var: &'static str,
        /// The raw value found in the environment.
        value: String,
    },

    /// A numeric variable was zero where zero makes no sense.
    #[error("{var} must be greater than zero")]
    ZeroNotAllowed {
        /// The offending variable name.
        var: &'static str,
    },
}

/// Where an effective value came from, for startup diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// The built-in default.
    #[default]
    Default,
    /// An environment variable override.
    Env,
}

/// Result of one load: the composed config plus everything worth telling
/// the operator about.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The composed configuration.
    pub config: Config,
    /// Where the effective hub URL came from.
    pub hub_url_source: ConfigSource,
    /// Non-fatal findings gathered during the load.
    pub warnings: ConfigWarnings,
}

/// Composes a [`Config`] from environment variables over built-in defaults.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the process environment.
    pub fn load() -> Result<ConfigLoad, ConfigLoadError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load with an explicit variable lookup. The seam exists so tests can
    /// inject values without mutating process-global state.
    pub fn load_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();
        let mut hub = HubConfig::default();
        let mut hub_url_source = ConfigSource::Default;

        if let Some(raw) = non_empty(lookup(ENV_HUB_URL)) {
            hub.base_url = Url::parse(raw.trim()).map_err(|source| {
                ConfigLoadError::InvalidHubUrl {
                    var: ENV_HUB_URL,
                    source,
                }
            })?;
            hub_url_source = ConfigSource::Env;
        }
        if hub.base_url.scheme() != "https" {
            warnings.push(ConfigWarning::InsecureHubUrl {
                url: hub.base_url.to_string(),
            });
        }

        if let Some(raw) = non_empty(lookup(ENV_BATCH_SIZE)) {
            let requested = parse_positive(ENV_BATCH_SIZE, &raw)?;
            hub.batch_size = if requested > MAX_BATCH_SIZE {
                warnings.push(ConfigWarning::BatchSizeClamped {
                    requested,
                    clamped: MAX_BATCH_SIZE,
                });
                MAX_BATCH_SIZE
            } else {
                requested
            };
        }

        if let Some(raw) = non_empty(lookup(ENV_REQUEST_TIMEOUT_SECS)) {
            let secs = parse_positive(ENV_REQUEST_TIMEOUT_SECS, &raw)?;
            hub.request_timeout = Duration::from_secs(secs as u64);
        }

        if let Some(agent) = non_empty(lookup(ENV_USER_AGENT)) {
            hub.user_agent = agent.trim().to_string();
        }

        let mut telemetry = TelemetryConfig::default();
        if let Some(filter) = non_empty(lookup(ENV_LOG)) {
            telemetry.log_filter = filter.trim().to_string();
        }

        Ok(ConfigLoad {
            config: Config { hub, telemetry },
            hub_url_source,
            warnings,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_positive(var: &'static str, raw: &str) -> Result<usize, ConfigLoadError> {
    let value: usize =
        raw.trim()
            .parse()
            .map_err(|_| ConfigLoadError::InvalidNumber {
                var,
                value: raw.to_string(),
            })?;
    if value == 0 {
        return Err(ConfigLoadError::ZeroNotAllowed { var });
    }
    Ok(value)
}

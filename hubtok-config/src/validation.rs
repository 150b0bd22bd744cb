//! Non-fatal configuration validation.

use std::fmt;

/// Non-fatal findings produced while composing the configuration.
///
/// Warnings never block startup; callers decide whether to surface them to
/// logs or a UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Requested batch size exceeded the upstream page cap and was clamped.
    BatchSizeClamped { requested: usize, clamped: usize },
    /// The hub URL uses plain HTTP; fine for a local mirror, suspicious
    /// against the public hub.
    InsecureHubUrl { url: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::BatchSizeClamped { requested, clamped } => write!(
                f,
                "batch size {requested} exceeds the upstream page cap, clamped to {clamped}"
            ),
            ConfigWarning::InsecureHubUrl { url } => {
                write!(f, "hub url {url} is not https")
            }
        }
    }
}

/// Accumulated warnings for one load.
#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    /// Record a warning.
    pub fn push(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }

    /// Whether the load produced no warnings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the recorded warnings.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    /// Emit every warning through `tracing` at warn level.
    pub fn log_all(&self) {
        for warning in &self.0 {
            tracing::warn!("config: {warning}");
        }
    }
}

//! Shared configuration library for Hubtok.
//!
//! This crate centralizes config loading and validation for the catalog
//! acquisition core: upstream endpoint, batch sizing, request timeouts, and
//! telemetry filtering. All values come from the environment with sensible
//! defaults, so a bare process talks to the public hub out of the box.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigSource};
pub use models::{Config, HubConfig, TelemetryConfig};
pub use validation::{ConfigWarning, ConfigWarnings};

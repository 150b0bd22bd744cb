//! Convenience re-exports for consumers of the acquisition core.

pub use crate::catalog::{
    CatalogSession, CatalogState, FetchRequest, LoadOutcome, MAX_VISIBLE_TAGS, extract_tags,
    filter_view,
};
pub use crate::error::{FetchError, Result};
pub use crate::nav::{GESTURE_THRESHOLD, Gesture, NavCursor, NavDirection};
pub use crate::providers::{HubApiProvider, ModelCatalogProvider};

pub use hubtok_config::{Config, ConfigLoader, HubConfig};
pub use hubtok_model::prelude::*;

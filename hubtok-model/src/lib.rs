//! Core data model definitions shared across Hubtok crates.

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod prelude;
pub mod record;
pub mod urls;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::UiSort;
pub use ids::{ModelId, PipelineTag};
pub use record::ModelRecord;
pub use urls::model_page_url;

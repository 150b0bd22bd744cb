//! Convenience re-exports for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::filter_types::UiSort;
pub use crate::ids::{ModelId, PipelineTag};
pub use crate::record::ModelRecord;
pub use crate::urls::model_page_url;

//! The accumulated catalog entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ModelId, PipelineTag};

/// One accumulated catalog entry.
///
/// Records are immutable once fetched; missing upstream fields are defaulted
/// at the provider boundary, never mid-pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Unique hub identifier; record identity.
    pub id: ModelId,
    /// Upstream pipeline category, when the record carries one.
    pub pipeline_tag: Option<PipelineTag>,
    /// Like count.
    pub likes: u64,
    /// Download count.
    pub downloads: u64,
    /// Publishing account, when upstream names one explicitly.
    pub author: Option<String>,
    /// Card description, when present.
    pub description: Option<String>,
    /// Free-form upstream labels beyond the pipeline category.
    pub tags: Vec<String>,
    /// Upstream creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl ModelRecord {
    /// A record with only the id set; counters zero, everything else absent.
    pub fn new(id: ModelId) -> Self {
        Self {
            id,
            pipeline_tag: None,
            likes: 0,
            downloads: 0,
            author: None,
            description: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    /// Builder-style pipeline tag assignment.
    pub fn with_pipeline_tag(mut self, tag: PipelineTag) -> Self {
        self.pipeline_tag = Some(tag);
        self
    }

    /// Display author: the explicit author field, falling back to the id's
    /// owner namespace when upstream omits it.
    pub fn display_author(&self) -> Option<&str> {
        self.author.as_deref().or_else(|| self.id.owner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_pipeline_tag_sets_the_tag() {
        let record = ModelRecord::new(ModelId::new("gpt2").unwrap())
            .with_pipeline_tag(PipelineTag::new("text-generation").unwrap());
        assert_eq!(record.pipeline_tag.unwrap().as_str(), "text-generation");
    }

    #[test]
    fn display_author_falls_back_to_owner() {
        let record = ModelRecord::new(ModelId::new("meta-llama/Llama-3.1-8B").unwrap());
        assert_eq!(record.display_author(), Some("meta-llama"));

        let mut named = ModelRecord::new(ModelId::new("gpt2").unwrap());
        assert_eq!(named.display_author(), None);
        named.author = Some("openai-community".to_string());
        assert_eq!(named.display_author(), Some("openai-community"));
    }
}

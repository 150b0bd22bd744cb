//! Validated identifier newtypes for hub models and pipeline categories.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Strongly typed hub model identifier with validation.
///
/// Upstream ids are either `owner/name` pairs or bare names for models
/// published under the hub's root namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Validate and construct an id; rejects empty or whitespace-bearing input.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId("id cannot be empty".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidId(format!(
                "id cannot contain whitespace: {id:?}"
            )));
        }
        Ok(ModelId(trimmed.to_string()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Owner namespace, when the id carries one.
    pub fn owner(&self) -> Option<&str> {
        self.0.split_once('/').map(|(owner, _)| owner)
    }

    /// Model name without the owner namespace.
    pub fn name(&self) -> &str {
        self.0
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.0)
    }
}

impl AsRef<str> for ModelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed pipeline category label (`text-generation`, `image-classification`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineTag(String);

impl PipelineTag {
    /// Validate and construct a tag; rejects empty input.
    pub fn new(tag: impl Into<String>) -> Result<Self, ModelError> {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidTag("tag cannot be empty".to_string()));
        }
        Ok(PipelineTag(trimmed.to_string()))
    }

    /// Lenient constructor for upstream data: empty or whitespace-only
    /// labels collapse to `None` instead of an error.
    pub fn parse_opt(tag: Option<&str>) -> Option<Self> {
        tag.and_then(|t| Self::new(t).ok())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PipelineTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PipelineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

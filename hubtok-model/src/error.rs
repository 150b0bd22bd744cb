//! Validation errors for model constructors.

use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    /// The id was empty or contained whitespace.
    InvalidId(String),
    /// The pipeline tag was empty.
    InvalidTag(String),
    /// URL construction failed.
    InvalidUrl(url::ParseError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(msg) => write!(f, "invalid model id: {msg}"),
            ModelError::InvalidTag(msg) => write!(f, "invalid pipeline tag: {msg}"),
            ModelError::InvalidUrl(err) => write!(f, "invalid url: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidUrl(err) => Some(err),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ModelError {
    fn from(err: url::ParseError) -> Self {
        ModelError::InvalidUrl(err)
    }
}

/// Alias for results carrying a [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;

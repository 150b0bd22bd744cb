//! Upstream catalog providers.
//!
//! [`ModelCatalogProvider`] is the seam between the accumulator and the
//! network: the session only ever asks for "the next `limit` records at
//! `offset`", so tests can drive the whole pipeline with a scripted
//! provider and never touch a socket.

mod hub_api;

pub use hub_api::HubApiProvider;

use async_trait::async_trait;
use hubtok_model::ModelRecord;

use crate::error::Result;

/// A source of paged model records.
#[async_trait]
pub trait ModelCatalogProvider: Send + Sync {
    /// Return the next `limit` records starting at `offset`, fewer if the
    /// listing is exhausted, or a [`crate::FetchError`].
    ///
    /// Implementations must not return partially validated batches: either
    /// every record decoded and validated, or the call fails.
    async fn list_models(&self, offset: usize, limit: usize) -> Result<Vec<ModelRecord>>;
}

#[async_trait]
impl<T: ModelCatalogProvider + ?Sized> ModelCatalogProvider for std::sync::Arc<T> {
    async fn list_models(&self, offset: usize, limit: usize) -> Result<Vec<ModelRecord>> {
        (**self).list_models(offset, limit).await
    }
}

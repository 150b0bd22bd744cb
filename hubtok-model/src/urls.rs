//! Detail-page URL construction.

use url::Url;

use crate::error::ModelError;
use crate::ids::ModelId;

/// Build the detail-page URL for a model: `<hub-base-url>/<id>`.
///
/// Purely a rendering concern; the core never fetches this URL.
pub fn model_page_url(base: &Url, id: &ModelId) -> Result<Url, ModelError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ModelError::InvalidId(format!("base url cannot be a base: {base}")))?;
        segments.pop_if_empty();
        segments.extend(id.as_str().split('/'));
    }
    Ok(url)
}

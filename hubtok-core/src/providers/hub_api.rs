use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hubtok_config::HubConfig;
use hubtok_model::{ModelId, ModelRecord, PipelineTag, UiSort};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{FetchError, Result};
use crate::providers::ModelCatalogProvider;

/// Path of the model listing endpoint below the hub base URL.
const LISTING_PATH: &str = "api/models";

/// Cap on error body bytes carried into [`FetchError::Status`].
const ERROR_BODY_LIMIT: usize = 512;

/// Hub listing API provider.
///
/// Requests true server-side pages (`limit`/`skip` query parameters)
/// rather than re-slicing one unpaginated response client-side; the
/// listing endpoint supports offset paging, so the "next `limit` records
/// at `offset`" contract holds without over-fetching.
#[derive(Debug, Clone)]
pub struct HubApiProvider {
    client: Client,
    base_url: Url,
    sort: Option<UiSort>,
}

impl HubApiProvider {
    /// Build a provider from connection settings. Fails only when the HTTP
    /// client cannot be constructed.
    pub fn new(config: &HubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            sort: None,
        })
    }

    /// Request a server-side sort order for the listing.
    pub fn with_sort(mut self, sort: UiSort) -> Self {
        self.sort = Some(sort);
        self
    }

    fn listing_url(&self, offset: usize, limit: usize) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(LISTING_PATH.split('/'));
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            query.append_pair("skip", &offset.to_string());
            // Expanded metadata carries the card description.
            query.append_pair("full", "true");
            if let Some(sort) = self.sort {
                query.append_pair("sort", sort.api_name());
                query.append_pair("direction", "-1");
            }
        }
        url
    }
}

/// Cap the error body carried into [`FetchError::Status`], backing off to
/// the nearest character boundary so a multibyte body cannot split.
fn truncate_error_body(mut body: String) -> String {
    let mut limit = ERROR_BODY_LIMIT.min(body.len());
    while !body.is_char_boundary(limit) {
        limit -= 1;
    }
    body.truncate(limit);
    body
}

#[async_trait]
impl ModelCatalogProvider for HubApiProvider {
    async fn list_models(&self, offset: usize, limit: usize) -> Result<Vec<ModelRecord>> {
        let url = self.listing_url(offset, limit);
        tracing::debug!(%url, offset, limit, "requesting listing page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = truncate_error_body(response.text().await.unwrap_or_default());
            return Err(FetchError::Status { status, body });
        }

        // Decode from text so schema problems surface as Decode, not as an
        // opaque transport error.
        let body = response.text().await?;
        let raw: Vec<RawModel> = serde_json::from_str(&body)?;

        raw.into_iter().map(RawModel::into_record).collect()
    }
}

/// Wire shape of one listing entry.
///
/// The upstream schema mixes snake_case and camelCase and is not guaranteed
/// stable; everything but the id is optional and defaulted here so loosely
/// typed data never crosses into the core.
#[derive(Debug, Deserialize)]
struct RawModel {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "modelId")]
    model_id: Option<String>,
    #[serde(default)]
    pipeline_tag: Option<String>,
    #[serde(default)]
    likes: Option<u64>,
    #[serde(default)]
    downloads: Option<u64>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, rename = "createdAt")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "cardData")]
    card_data: Option<serde_json::Value>,
}

impl RawModel {
    fn into_record(self) -> Result<ModelRecord> {
        let raw_id = self
            .id
            .or(self.model_id)
            .ok_or_else(|| FetchError::InvalidRecord("listing entry without id".to_string()))?;
        let id = ModelId::new(raw_id).map_err(|e| FetchError::InvalidRecord(e.to_string()))?;

        let description = self
            .card_data
            .as_ref()
            .and_then(|card| card.get("description"))
            .and_then(|d| d.as_str())
            .map(str::to_string);

        Ok(ModelRecord {
            id,
            pipeline_tag: PipelineTag::parse_opt(self.pipeline_tag.as_deref()),
            likes: self.likes.unwrap_or(0),
            downloads: self.downloads.unwrap_or(0),
            author: self.author.filter(|a| !a.trim().is_empty()),
            description,
            tags: self.tags,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_base(base: &str) -> HubApiProvider {
        let config = HubConfig {
            base_url: Url::parse(base).unwrap(),
            ..HubConfig::default()
        };
        HubApiProvider::new(&config).unwrap()
    }

    #[test]
    fn listing_url_carries_paging_parameters() {
        let provider = provider_with_base("https://huggingface.co");
        let url = provider.listing_url(20, 10);
        assert_eq!(url.path(), "/api/models");
        let query = url.query().unwrap();
        assert!(query.contains("limit=10"));
        assert!(query.contains("skip=20"));
        assert!(query.contains("full=true"));
        assert!(!query.contains("sort="));
    }

    #[test]
    fn listing_url_appends_sort_when_requested() {
        let provider =
            provider_with_base("https://hub.example.com/mirror").with_sort(UiSort::MostLikes);
        let url = provider.listing_url(0, 25);
        assert_eq!(url.path(), "/mirror/api/models");
        let query = url.query().unwrap();
        assert!(query.contains("sort=likes"));
        assert!(query.contains("direction=-1"));
    }

    #[test]
    fn raw_model_defaults_missing_counters_and_reads_card_description() {
        let raw: RawModel = serde_json::from_str(
            r#"{
                "id": "openai/whisper-large-v3",
                "pipeline_tag": "automatic-speech-recognition",
                "cardData": { "description": "Robust speech recognition" }
            }"#,
        )
        .unwrap();
        let record = raw.into_record().unwrap();
        assert_eq!(record.id.as_str(), "openai/whisper-large-v3");
        assert_eq!(record.likes, 0);
        assert_eq!(record.downloads, 0);
        assert_eq!(
            record.description.as_deref(),
            Some("Robust speech recognition")
        );
    }

    #[test]
    fn raw_model_without_any_id_is_invalid() {
        let raw: RawModel = serde_json::from_str(r#"{ "likes": 3 }"#).unwrap();
        assert!(matches!(
            raw.into_record(),
            Err(FetchError::InvalidRecord(_))
        ));
    }

    #[test]
    fn error_body_cap_backs_off_to_a_char_boundary() {
        // A two-byte character straddling the byte cap must not split.
        let mut body = "x".repeat(ERROR_BODY_LIMIT - 1);
        body.push('é');
        body.push_str("trailing");
        let capped = truncate_error_body(body);
        assert_eq!(capped.len(), ERROR_BODY_LIMIT - 1);
        assert!(capped.chars().all(|c| c == 'x'));

        let short = truncate_error_body("fine".to_string());
        assert_eq!(short, "fine");
    }

    #[test]
    fn raw_model_accepts_legacy_model_id_field() {
        let raw: RawModel =
            serde_json::from_str(r#"{ "modelId": "gpt2", "likes": 7 }"#).unwrap();
        let record = raw.into_record().unwrap();
        assert_eq!(record.id.as_str(), "gpt2");
        assert_eq!(record.likes, 7);
    }
}

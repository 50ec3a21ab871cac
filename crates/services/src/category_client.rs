use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use wrapped_core::model::{Category, CategoryResult, RankedItem, SubjectId, TimeRange};

use crate::config::ApiConfig;
use crate::error::{ConfigError, FetchError};

/// Source of ranked category data.
///
/// The controller depends on this seam rather than on HTTP directly.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch the ranked items of `category` for one subject.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the backend is unreachable, answers with a
    /// non-success status, or sends a body that is not a list of items.
    async fn fetch(
        &self,
        category: Category,
        subject_id: &SubjectId,
        is_duo: bool,
        time_range: TimeRange,
    ) -> Result<CategoryResult, FetchError>;
}

/// HTTP adapter for the `category/display*` endpoints. Issues exactly one
/// request per call and never retries.
#[derive(Clone)]
pub struct CategoryClient {
    client: Client,
    config: ApiConfig,
}

impl CategoryClient {
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: config.http_client()?,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl CategorySource for CategoryClient {
    async fn fetch(
        &self,
        category: Category,
        subject_id: &SubjectId,
        is_duo: bool,
        time_range: TimeRange,
    ) -> Result<CategoryResult, FetchError> {
        let url = self.config.category_url(category).clone();
        tracing::debug!(%category, subject = %subject_id, is_duo, %time_range, "fetching category");

        let response = self
            .client
            .get(url)
            .query(&[
                ("id", subject_id.as_str().to_owned()),
                ("isDuo", is_duo.to_string()),
                ("timeRange", time_range.to_string()),
            ])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(%category, timeout = err.is_timeout(), error = %err, "category request failed");
                FetchError::Unreachable
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%category, status = status.as_u16(), "category request rejected");
            return Err(FetchError::ServerError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|err| {
            tracing::warn!(%category, error = %err, "category body could not be read");
            FetchError::Unreachable
        })?;

        let items = decode_category(&body, is_duo).inspect_err(|err| {
            tracing::warn!(%category, error = %err, "category body rejected");
        })?;
        tracing::debug!(%category, count = items.len(), "category fetched");
        Ok(items)
    }
}

#[derive(Debug, Deserialize)]
struct WireItem {
    name: String,
    image: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    artist: Option<String>,
}

/// Validate and convert a response body into ranked items.
///
/// The body must be a JSON array whose every element carries `name` and
/// `image`; one bad element rejects the whole body. Solo results are ranked
/// by position. Duo results interleave the two subjects
/// (`[mine#1, partner#1, mine#2, partner#2]`), so each pair shares a rank.
///
/// # Errors
///
/// Returns `FetchError::InvalidShape` when the body does not match.
pub fn decode_category(body: &[u8], is_duo: bool) -> Result<CategoryResult, FetchError> {
    let wire: Vec<WireItem> =
        serde_json::from_slice(body).map_err(|err| FetchError::InvalidShape(err.to_string()))?;

    wire.into_iter()
        .enumerate()
        .map(|(index, item)| {
            RankedItem::new(
                rank_for(index, is_duo),
                item.name,
                item.image,
                item.desc.unwrap_or_default(),
                item.artist,
            )
            .map_err(|err| FetchError::InvalidShape(format!("item {index}: {err}")))
        })
        .collect()
}

fn rank_for(index: usize, is_duo: bool) -> u32 {
    let position = if is_duo { index / 2 } else { index };
    u32::try_from(position + 1).unwrap_or(u32::MAX)
}

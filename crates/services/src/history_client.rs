use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use wrapped_core::model::HistoryEntry;

use crate::config::ApiConfig;
use crate::error::{ConfigError, HistoryError};

/// Past result sets the user can start a reveal flow from.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// List stored result sets for the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NoHistory` when the account has none yet.
    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Delete one stored result set.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` when the backend refuses or cannot be reached.
    async fn delete(&self, id: u64) -> Result<(), HistoryError>;
}

#[derive(Clone)]
pub struct HistoryClient {
    client: Client,
    config: ApiConfig,
}

impl HistoryClient {
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: config.http_client()?,
            config,
        })
    }
}

fn unreachable(err: &reqwest::Error) -> HistoryError {
    tracing::warn!(error = %err, "history request failed");
    HistoryError::Unreachable
}

#[async_trait]
impl HistorySource for HistoryClient {
    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let response = self
            .client
            .get(self.config.history_url().clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| unreachable(&err))?;

        let status = response.status();
        // The backend reports an empty history as a server error.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return Err(HistoryError::NoHistory);
        }
        if !status.is_success() {
            return Err(HistoryError::ServerError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|err| unreachable(&err))?;
        let entries: Vec<HistoryEntry> = serde_json::from_slice(&body)
            .map_err(|err| HistoryError::InvalidShape(err.to_string()))?;
        tracing::debug!(count = entries.len(), "history fetched");
        Ok(entries)
    }

    async fn delete(&self, id: u64) -> Result<(), HistoryError> {
        let response = self
            .client
            .get(self.config.delete_url().clone())
            .query(&[("deleteId", id)])
            .send()
            .await
            .map_err(|err| unreachable(&err))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(id, status = status.as_u16(), "history delete rejected");
            return Err(HistoryError::ServerError(status.as_u16()));
        }
        tracing::info!(id, "history entry deleted");
        Ok(())
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use wrapped_core::ContextError;

/// Why a category fetch did not produce a usable result.
///
/// Cloneable so it can live inside a screen's terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("backend is unreachable")]
    Unreachable,
    #[error("backend responded with status {0}")]
    ServerError(u16),
    #[error("backend response has an unexpected shape: {0}")]
    InvalidShape(String),
}

/// Errors emitted by `HistoryClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HistoryError {
    #[error("no history for this account")]
    NoHistory,
    #[error("backend is unreachable")]
    Unreachable,
    #[error("history request failed with status {0}")]
    ServerError(u16),
    #[error("history response has an unexpected shape: {0}")]
    InvalidShape(String),
}

/// Errors emitted while building API configuration or HTTP clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base url {raw:?}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
    #[error("invalid request timeout {raw:?}")]
    InvalidTimeout { raw: String },
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),
}

/// Errors emitted by `RevealFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FlowError {
    /// The flow was entered before any screen started it.
    #[must_use]
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, FlowError::Context(ContextError::NotInitialized))
    }
}

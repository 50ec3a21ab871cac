use thiserror::Error;

use crate::model::TimeRange;

/// Problems with the session context that drives a reveal flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContextError {
    #[error("reveal flow has not been started")]
    NotInitialized,
    #[error("subject id must not be empty")]
    InvalidSubjectId,
    #[error(
        "time range must be between {} and {}, got {raw:?}",
        TimeRange::MIN,
        TimeRange::MAX
    )]
    InvalidTimeRange { raw: String },
}

/// Validation failures for a single ranked item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ItemError {
    #[error("rank must start at 1")]
    ZeroRank,
    #[error("item name must not be empty")]
    EmptyName,
    #[error("item image must not be empty")]
    EmptyImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenParseError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown reveal screen: {0}")]
    UnknownScreen(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Item(#[from] ItemError),
    #[error(transparent)]
    ScreenParse(#[from] ScreenParseError),
}

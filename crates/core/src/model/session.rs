use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SubjectId;
use crate::error::ContextError;

/// Lookback window for the ranked data (1 = short, 2 = medium, 3 = long term).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TimeRange(u8);

impl TimeRange {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub const SHORT: TimeRange = TimeRange(1);
    pub const MEDIUM: TimeRange = TimeRange(2);
    pub const LONG: TimeRange = TimeRange(3);

    /// # Errors
    ///
    /// Returns `ContextError::InvalidTimeRange` outside `MIN..=MAX`.
    pub fn new(value: u8) -> Result<Self, ContextError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ContextError::InvalidTimeRange {
                raw: value.to_string(),
            })
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn all() -> [TimeRange; 3] {
        [Self::SHORT, Self::MEDIUM, Self::LONG]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Last 4 weeks",
            2 => "Last 6 months",
            _ => "Last year",
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<u8> for TimeRange {
    type Error = ContextError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TimeRange> for u8 {
    fn from(range: TimeRange) -> Self {
        range.0
    }
}

impl FromStr for TimeRange {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| ContextError::InvalidTimeRange { raw: s.to_owned() })
            .and_then(Self::new)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiers that persist across every screen of one reveal flow.
///
/// Built once at flow entry and passed to each screen; screens never mutate it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionContext {
    subject_id: SubjectId,
    is_duo: bool,
    time_range: TimeRange,
}

impl SessionContext {
    #[must_use]
    pub fn new(subject_id: SubjectId, is_duo: bool, time_range: TimeRange) -> Self {
        Self {
            subject_id,
            is_duo,
            time_range,
        }
    }

    #[must_use]
    pub fn subject_id(&self) -> &SubjectId {
        &self.subject_id
    }

    #[must_use]
    pub fn is_duo(&self) -> bool {
        self.is_duo
    }

    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }
}

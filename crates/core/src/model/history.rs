use serde::{Deserialize, Serialize};

use super::SubjectId;

/// A stored result set the user can replay from the history screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    #[serde(rename = "isDuo")]
    pub is_duo: bool,
}

impl HistoryEntry {
    #[must_use]
    pub fn subject_id(&self) -> SubjectId {
        SubjectId::from(self.id)
    }
}

use wrapped_core::model::{HistoryEntry, SubjectId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntryVm {
    pub id: u64,
    pub subject_id: SubjectId,
    pub is_duo: bool,
    pub label: String,
    pub class: &'static str,
}

impl From<&HistoryEntry> for HistoryEntryVm {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            id: entry.id,
            subject_id: entry.subject_id(),
            is_duo: entry.is_duo,
            label: entry.id.to_string(),
            class: if entry.is_duo {
                "history-entry history-duo"
            } else {
                "history-entry history-solo"
            },
        }
    }
}

#[must_use]
pub fn map_history_entries(entries: &[HistoryEntry]) -> Vec<HistoryEntryVm> {
    entries.iter().map(HistoryEntryVm::from).collect()
}

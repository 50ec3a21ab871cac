mod history_vm;
mod reveal_vm;

pub use history_vm::{HistoryEntryVm, map_history_entries};
pub use reveal_vm::{
    ComparisonVm, RankedCardVm, RevealBodyVm, RevealScreenVm, map_reveal_screen,
};

mod components;
mod finished;
mod history;
mod reveal;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use finished::FinishedView;
pub use history::HistoryView;
pub use reveal::RevealView;
pub use state::{ViewError, ViewState, view_state_from_resource};

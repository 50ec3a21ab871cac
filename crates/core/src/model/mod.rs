mod category;
mod history;
mod ids;
mod item;
mod session;

pub use category::Category;
pub use history::HistoryEntry;
pub use ids::SubjectId;
pub use item::{CategoryResult, RankedItem, RevealPair};
pub use session::{SessionContext, TimeRange};

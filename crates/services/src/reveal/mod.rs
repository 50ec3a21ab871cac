mod cache;
mod controller;
mod flow;
mod state;

pub use cache::RevealCache;
pub use controller::{RevealController, ScreenTicket};
pub use flow::{IS_DUO_KEY, RevealFlowService, SUBJECT_ID_KEY, TIME_RANGE_KEY};
pub use state::{LoadedScreen, ScreenState, SliceOrigin};

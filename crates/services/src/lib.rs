#![forbid(unsafe_code)]

pub mod category_client;
pub mod config;
pub mod error;
pub mod history_client;
pub mod reveal;

pub use category_client::{CategoryClient, CategorySource, decode_category};
pub use config::ApiConfig;
pub use error::{ConfigError, FetchError, FlowError, HistoryError};
pub use history_client::{HistoryClient, HistorySource};
pub use reveal::{
    LoadedScreen, RevealCache, RevealController, RevealFlowService, ScreenState, ScreenTicket,
    SliceOrigin,
};

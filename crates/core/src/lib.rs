#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod reveal;

pub use error::{ContextError, Error, ItemError, ScreenParseError};

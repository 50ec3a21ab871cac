//! Pure reveal-flow rules: screen order, result splitting, and layout choice.

mod layout;
mod sequence;
mod split;

pub use layout::{RevealLayout, select_layout};
pub use sequence::{RevealPage, Screen, advance};
pub use split::{REQUIRED_FOR_NEXT, RevealSplit, SHOWN_PER_SCREEN};

use wrapped_core::model::{CategoryResult, RankedItem, RevealPair};
use wrapped_core::reveal::{RevealSplit, Screen};

use crate::error::FetchError;

/// Where a loaded screen got its items from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceOrigin {
    Fetched,
    Cached,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedScreen {
    pub shown: Vec<RankedItem>,
    pub origin: SliceOrigin,
    /// The backend sent fewer items than the screen wanted.
    pub insufficient: bool,
}

/// Lifecycle of one mounted reveal screen.
///
/// `Idle → Loading → Loaded | Failed`, or `Idle → Loaded` straight from the
/// cache. `Loaded` and `Failed` are terminal: every transition leaves them
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScreenState {
    #[default]
    Idle,
    Loading,
    Loaded(LoadedScreen),
    Failed(FetchError),
}

impl ScreenState {
    #[must_use]
    pub fn start_loading(self) -> Self {
        match self {
            ScreenState::Idle => ScreenState::Loading,
            other => other,
        }
    }

    #[must_use]
    pub fn load_cached(self, pair: RevealPair) -> Self {
        match self {
            ScreenState::Idle => ScreenState::Loaded(LoadedScreen {
                shown: RevealSplit::from_cached(pair).into_parts().0,
                origin: SliceOrigin::Cached,
                insufficient: false,
            }),
            other => other,
        }
    }

    /// Apply a fetch outcome. Returns the new state plus the pair the
    /// continuation screen should receive, if the result was long enough.
    #[must_use]
    pub fn resolve(
        self,
        screen: Screen,
        outcome: Result<CategoryResult, FetchError>,
    ) -> (Self, Option<RevealPair>) {
        if self != ScreenState::Loading {
            return (self, None);
        }
        match outcome {
            Ok(items) => {
                let split = RevealSplit::for_screen(screen, &items);
                let insufficient = split.is_insufficient();
                if insufficient {
                    tracing::debug!(%screen, count = items.len(), "insufficient items for screen");
                }
                let (shown, next) = split.into_parts();
                let state = ScreenState::Loaded(LoadedScreen {
                    shown,
                    origin: SliceOrigin::Fetched,
                    insufficient,
                });
                (state, next)
            }
            Err(err) => (ScreenState::Failed(err), None),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenState::Loaded(_) | ScreenState::Failed(_))
    }

    /// Items to display, when loaded.
    #[must_use]
    pub fn shown(&self) -> Option<&[RankedItem]> {
        match self {
            ScreenState::Loaded(loaded) => Some(&loaded.shown),
            _ => None,
        }
    }
}

use crate::model::{RankedItem, RevealPair};

use super::sequence::Screen;

/// Items displayed on one screen.
pub const SHOWN_PER_SCREEN: usize = 2;

/// A result needs this many items before a continuation pair can be cached.
pub const REQUIRED_FOR_NEXT: usize = SHOWN_PER_SCREEN * 2;

/// A category result divided into what a screen shows now and what it
/// hands over to the continuation screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSplit {
    shown: Vec<RankedItem>,
    next: Option<RevealPair>,
    insufficient: bool,
}

impl RevealSplit {
    /// Split a freshly fetched result for `screen`.
    ///
    /// Lead screens keep `items[0..2]` and hold back `items[2..4]`; anything
    /// after the 4th item is dropped. Continuation screens (reached without
    /// a cached pair) show `items[2..4]` and hold nothing back. Short results
    /// never fail: the missing part is simply empty.
    #[must_use]
    pub fn for_screen(screen: Screen, items: &[RankedItem]) -> Self {
        let range = screen.shown_range();
        let end = range.end.min(items.len());
        let shown = items
            .get(range.start..end)
            .map(<[RankedItem]>::to_vec)
            .unwrap_or_default();

        let next = if screen.is_lead() {
            items
                .get(SHOWN_PER_SCREEN..REQUIRED_FOR_NEXT)
                .and_then(|pair| RevealPair::try_from(pair.to_vec()).ok())
        } else {
            None
        };

        let insufficient = shown.len() < SHOWN_PER_SCREEN || (screen.is_lead() && next.is_none());

        Self {
            shown,
            next,
            insufficient,
        }
    }

    /// A continuation screen served straight from the cache.
    #[must_use]
    pub fn from_cached(pair: RevealPair) -> Self {
        Self {
            shown: Vec::from(pair),
            next: None,
            insufficient: false,
        }
    }

    #[must_use]
    pub fn shown(&self) -> &[RankedItem] {
        &self.shown
    }

    #[must_use]
    pub fn next(&self) -> Option<&RevealPair> {
        self.next.as_ref()
    }

    /// The backend returned fewer items than the screen needed.
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        self.insufficient
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<RankedItem>, Option<RevealPair>) {
        (self.shown, self.next)
    }
}

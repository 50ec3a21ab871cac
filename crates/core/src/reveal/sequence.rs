use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::ScreenParseError;
use crate::model::Category;

use super::split::SHOWN_PER_SCREEN;

/// Each category is revealed over two screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPage {
    /// Ranks 1-2, fetched on mount.
    Lead,
    /// Ranks 3-4, normally served from the cache the lead screen filled.
    Continuation,
}

/// A single screen of the reveal flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Screen {
    category: Category,
    page: RevealPage,
}

impl Screen {
    pub const FIRST: Screen = Screen::lead(Category::Artists);

    #[must_use]
    pub const fn lead(category: Category) -> Self {
        Self {
            category,
            page: RevealPage::Lead,
        }
    }

    #[must_use]
    pub const fn continuation(category: Category) -> Self {
        Self {
            category,
            page: RevealPage::Continuation,
        }
    }

    #[must_use]
    pub fn category(self) -> Category {
        self.category
    }

    #[must_use]
    pub fn page(self) -> RevealPage {
        self.page
    }

    #[must_use]
    pub fn is_lead(self) -> bool {
        self.page == RevealPage::Lead
    }

    /// Slice of a full category result this screen displays.
    #[must_use]
    pub fn shown_range(self) -> Range<usize> {
        match self.page {
            RevealPage::Lead => 0..SHOWN_PER_SCREEN,
            RevealPage::Continuation => SHOWN_PER_SCREEN..SHOWN_PER_SCREEN * 2,
        }
    }

    /// Stable path segment, e.g. `artists` or `artists-more`.
    #[must_use]
    pub fn slug(self) -> String {
        match self.page {
            RevealPage::Lead => self.category.as_str().to_owned(),
            RevealPage::Continuation => format!("{}-more", self.category.as_str()),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Screen that follows `screen`, or `None` once the flow is over.
#[must_use]
pub fn advance(screen: Screen) -> Option<Screen> {
    match screen.page {
        RevealPage::Lead => Some(Screen::continuation(screen.category)),
        RevealPage::Continuation => screen.category.next().map(Screen::lead),
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

impl FromStr for Screen {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_category, page) = match s.strip_suffix("-more") {
            Some(rest) => (rest, RevealPage::Continuation),
            None => (s, RevealPage::Lead),
        };
        let category = raw_category
            .parse::<Category>()
            .map_err(|_| ScreenParseError::UnknownScreen(s.to_owned()))?;
        Ok(Self { category, page })
    }
}

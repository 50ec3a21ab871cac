use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScreenParseError;

/// Content categories revealed by the flow, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Artists,
    Genres,
    Tracks,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Artists, Category::Genres, Category::Tracks];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Artists => "artists",
            Category::Genres => "genres",
            Category::Tracks => "tracks",
        }
    }

    /// Backend endpoint name under the `category/` prefix.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Category::Artists => "displayartists",
            Category::Genres => "displaygenres",
            Category::Tracks => "displaytracks",
        }
    }

    /// Session store key holding the prefetched pair for this category.
    #[must_use]
    pub const fn cache_key(self) -> &'static str {
        match self {
            Category::Artists => "artistsNext",
            Category::Genres => "genresNext",
            Category::Tracks => "tracksNext",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Category::Artists => "Top Artists",
            Category::Genres => "Top Genres",
            Category::Tracks => "Top Tracks",
        }
    }

    /// Category that follows this one in the reveal flow.
    #[must_use]
    pub const fn next(self) -> Option<Category> {
        match self {
            Category::Artists => Some(Category::Genres),
            Category::Genres => Some(Category::Tracks),
            Category::Tracks => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScreenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ScreenParseError::UnknownCategory(s.to_owned()))
    }
}

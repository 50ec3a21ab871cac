use serde::{Deserialize, Serialize};

use crate::error::ItemError;

/// One entry of a ranked category result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredItem")]
pub struct RankedItem {
    rank: u32,
    name: String,
    image_url: String,
    description: String,
    secondary: Option<String>,
}

/// Serialized form of `RankedItem`; decoding goes back through `RankedItem::new`.
#[derive(Deserialize)]
struct StoredItem {
    rank: u32,
    name: String,
    image_url: String,
    description: String,
    secondary: Option<String>,
}

impl TryFrom<StoredItem> for RankedItem {
    type Error = ItemError;

    fn try_from(stored: StoredItem) -> Result<Self, Self::Error> {
        Self::new(
            stored.rank,
            stored.name,
            stored.image_url,
            stored.description,
            stored.secondary,
        )
    }
}

/// Ordered result of a category fetch.
pub type CategoryResult = Vec<RankedItem>;

/// The 3rd and 4th items of a result, held back for the continuation screen.
pub type RevealPair = [RankedItem; 2];

impl RankedItem {
    /// Build a validated item.
    ///
    /// # Errors
    ///
    /// Returns `ItemError` when the rank is zero or name/image are blank.
    pub fn new(
        rank: u32,
        name: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        secondary: Option<String>,
    ) -> Result<Self, ItemError> {
        if rank == 0 {
            return Err(ItemError::ZeroRank);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }
        let image_url = image_url.into();
        if image_url.trim().is_empty() {
            return Err(ItemError::EmptyImage);
        }
        Ok(Self {
            rank,
            name,
            image_url,
            description: description.into(),
            secondary: secondary.filter(|value| !value.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Extra label, e.g. the artist of a track.
    #[must_use]
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }
}

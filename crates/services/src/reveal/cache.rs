use std::sync::Arc;

use storage::repository::{SessionStore, StorageError};
use wrapped_core::model::{Category, RevealPair};

/// Holds the prefetched continuation pair per category.
///
/// Entries are handed out once: `take` removes what it returns. A miss means
/// the screen has to fetch fresh.
#[derive(Clone)]
pub struct RevealCache {
    store: Arc<dyn SessionStore>,
}

impl RevealCache {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Store `pair` for `category`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the pair cannot be encoded or stored.
    pub async fn put(&self, category: Category, pair: &RevealPair) -> Result<(), StorageError> {
        let value = serde_json::to_string(pair)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.set(category.cache_key(), &value).await?;
        tracing::debug!(%category, "cached continuation pair");
        Ok(())
    }

    /// Remove and return the pair cached for `category`.
    ///
    /// An entry that no longer decodes is dropped and reported as a miss.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn take(&self, category: Category) -> Result<Option<RevealPair>, StorageError> {
        let Some(raw) = self.store.remove(category.cache_key()).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<RevealPair>(&raw) {
            Ok(pair) => {
                tracing::debug!(%category, "took cached continuation pair");
                Ok(Some(pair))
            }
            Err(err) => {
                tracing::warn!(%category, error = %err, "discarding unreadable cache entry");
                Ok(None)
            }
        }
    }

    /// Drop the entry for `category` without decoding it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be removed.
    pub async fn evict(&self, category: Category) -> Result<(), StorageError> {
        if self.store.remove(category.cache_key()).await?.is_some() {
            tracing::debug!(%category, "evicted continuation pair");
        }
        Ok(())
    }

    /// Drop every category's entry.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an entry cannot be removed.
    pub async fn clear(&self) -> Result<(), StorageError> {
        for category in Category::ALL {
            self.store.remove(category.cache_key()).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemorySessionStore;
    use wrapped_core::model::RankedItem;

    fn pair() -> RevealPair {
        [
            RankedItem::new(3, "third", "3.png", "", None).unwrap(),
            RankedItem::new(4, "fourth", "4.png", "", Some("artist".into())).unwrap(),
        ]
    }

    #[tokio::test]
    async fn take_twice_yields_pair_then_empty() {
        let cache = RevealCache::new(Arc::new(InMemorySessionStore::new()));
        cache.put(Category::Tracks, &pair()).await.unwrap();

        assert_eq!(cache.take(Category::Tracks).await.unwrap(), Some(pair()));
        assert_eq!(cache.take(Category::Tracks).await.unwrap(), None);
    }

    #[tokio::test]
    async fn entries_are_per_category_and_overwritten() {
        let cache = RevealCache::new(Arc::new(InMemorySessionStore::new()));
        cache.put(Category::Artists, &pair()).await.unwrap();
        assert_eq!(cache.take(Category::Genres).await.unwrap(), None);

        let mut replacement = pair();
        replacement.swap(0, 1);
        cache.put(Category::Artists, &replacement).await.unwrap();
        assert_eq!(cache.take(Category::Artists).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn corrupt_entry_is_a_miss() {
        let store = Arc::new(InMemorySessionStore::new());
        store.set(Category::Genres.cache_key(), "{not json").await.unwrap();
        let cache = RevealCache::new(store.clone());

        assert_eq!(cache.take(Category::Genres).await.unwrap(), None);
        assert_eq!(store.get(Category::Genres.cache_key()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn entry_with_invalid_item_is_a_miss() {
        let store = Arc::new(InMemorySessionStore::new());
        let item = r#"{"rank":0,"name":"x","image_url":"x.png","description":"","secondary":null}"#;
        store
            .set(Category::Artists.cache_key(), &format!("[{item},{item}]"))
            .await
            .unwrap();
        let cache = RevealCache::new(store);

        assert_eq!(cache.take(Category::Artists).await.unwrap(), None);
    }

    #[tokio::test]
    async fn evict_empties_only_that_slot() {
        let cache = RevealCache::new(Arc::new(InMemorySessionStore::new()));
        cache.put(Category::Artists, &pair()).await.unwrap();
        cache.put(Category::Tracks, &pair()).await.unwrap();

        cache.evict(Category::Tracks).await.unwrap();
        cache.evict(Category::Tracks).await.unwrap();

        assert_eq!(cache.take(Category::Tracks).await.unwrap(), None);
        assert_eq!(cache.take(Category::Artists).await.unwrap(), Some(pair()));
    }

    #[tokio::test]
    async fn clear_removes_all_slots() {
        let cache = RevealCache::new(Arc::new(InMemorySessionStore::new()));
        for category in Category::ALL {
            cache.put(category, &pair()).await.unwrap();
        }
        cache.clear().await.unwrap();
        for category in Category::ALL {
            assert_eq!(cache.take(category).await.unwrap(), None);
        }
    }
}

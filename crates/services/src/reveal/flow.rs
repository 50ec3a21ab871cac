use std::sync::Arc;

use storage::repository::SessionStore;
use wrapped_core::ContextError;
use wrapped_core::model::{SessionContext, SubjectId, TimeRange};

use super::RevealCache;
use crate::error::FlowError;

pub const SUBJECT_ID_KEY: &str = "subjectId";
pub const IS_DUO_KEY: &str = "isDuo";
pub const TIME_RANGE_KEY: &str = "timeRange";

/// Persists the session context of the active reveal flow.
///
/// Only flow entry writes here; screens receive the context explicitly and
/// never read this store. Reading is for resuming a flow after a restart.
#[derive(Clone)]
pub struct RevealFlowService {
    store: Arc<dyn SessionStore>,
    cache: RevealCache,
}

impl RevealFlowService {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let cache = RevealCache::new(Arc::clone(&store));
        Self { store, cache }
    }

    #[must_use]
    pub fn cache(&self) -> &RevealCache {
        &self.cache
    }

    /// Start a new flow: drop the previous flow's cache and persist `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Storage` if the store cannot be updated.
    pub async fn begin(&self, ctx: &SessionContext) -> Result<(), FlowError> {
        self.cache.clear().await?;
        self.store
            .set(SUBJECT_ID_KEY, ctx.subject_id().as_str())
            .await?;
        self.store
            .set(IS_DUO_KEY, if ctx.is_duo() { "true" } else { "false" })
            .await?;
        self.store
            .set(TIME_RANGE_KEY, &ctx.time_range().to_string())
            .await?;
        tracing::info!(
            subject = %ctx.subject_id(),
            is_duo = ctx.is_duo(),
            time_range = %ctx.time_range(),
            "reveal flow started"
        );
        Ok(())
    }

    /// Read the persisted context.
    ///
    /// A missing duo flag means solo; a missing time range means the default.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::NotInitialized` (wrapped) when no flow was
    /// started, other `ContextError`s for malformed values, or storage errors.
    pub async fn current(&self) -> Result<SessionContext, FlowError> {
        let subject = self
            .store
            .get(SUBJECT_ID_KEY)
            .await?
            .ok_or(ContextError::NotInitialized)?;
        let subject_id = SubjectId::new(subject)?;

        let is_duo = self
            .store
            .get(IS_DUO_KEY)
            .await?
            .is_some_and(|raw| matches!(raw.trim(), "true" | "1"));

        let time_range = match self.store.get(TIME_RANGE_KEY).await? {
            Some(raw) => raw.parse::<TimeRange>()?,
            None => TimeRange::default(),
        };

        Ok(SessionContext::new(subject_id, is_duo, time_range))
    }

    /// Forget the flow: context keys and every cache slot.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Storage` if the store cannot be updated.
    pub async fn clear(&self) -> Result<(), FlowError> {
        for key in [SUBJECT_ID_KEY, IS_DUO_KEY, TIME_RANGE_KEY] {
            self.store.remove(key).await?;
        }
        self.cache.clear().await?;
        tracing::info!("reveal flow cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemorySessionStore;
    use wrapped_core::model::{Category, RankedItem};

    fn service() -> (Arc<InMemorySessionStore>, RevealFlowService) {
        let store = Arc::new(InMemorySessionStore::new());
        let service = RevealFlowService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn current_before_begin_is_not_initialized() {
        let (_, flow) = service();
        let err = flow.current().await.unwrap_err();
        assert!(err.is_not_initialized());
    }

    #[tokio::test]
    async fn begin_then_current_round_trips() {
        let (store, flow) = service();
        let ctx = SessionContext::new(SubjectId::from(42), true, TimeRange::LONG);
        flow.begin(&ctx).await.unwrap();

        assert_eq!(flow.current().await.unwrap(), ctx);
        assert_eq!(store.get(IS_DUO_KEY).await.unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(TIME_RANGE_KEY).await.unwrap().as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn legacy_duo_flag_and_missing_range_are_accepted() {
        let (store, flow) = service();
        store.set(SUBJECT_ID_KEY, "7").await.unwrap();
        store.set(IS_DUO_KEY, "1").await.unwrap();

        let ctx = flow.current().await.unwrap();
        assert!(ctx.is_duo());
        assert_eq!(ctx.time_range(), TimeRange::MEDIUM);
    }

    #[tokio::test]
    async fn malformed_time_range_is_reported() {
        let (store, flow) = service();
        store.set(SUBJECT_ID_KEY, "7").await.unwrap();
        store.set(TIME_RANGE_KEY, "9").await.unwrap();

        let err = flow.current().await.unwrap_err();
        assert!(matches!(
            err,
            FlowError::Context(ContextError::InvalidTimeRange { .. })
        ));
    }

    #[tokio::test]
    async fn begin_discards_previous_flow_cache() {
        let (_, flow) = service();
        let item = |rank| RankedItem::new(rank, "x", "x.png", "", None).unwrap();
        flow.cache()
            .put(Category::Artists, &[item(3), item(4)])
            .await
            .unwrap();

        let ctx = SessionContext::new(SubjectId::from(1), false, TimeRange::SHORT);
        flow.begin(&ctx).await.unwrap();
        assert_eq!(flow.cache().take(Category::Artists).await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_forgets_context() {
        let (_, flow) = service();
        let ctx = SessionContext::new(SubjectId::from(1), false, TimeRange::SHORT);
        flow.begin(&ctx).await.unwrap();
        flow.clear().await.unwrap();
        assert!(flow.current().await.unwrap_err().is_not_initialized());
    }
}

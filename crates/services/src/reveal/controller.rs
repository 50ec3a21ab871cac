use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use wrapped_core::model::SessionContext;
use wrapped_core::reveal::Screen;

use super::{RevealCache, ScreenState};
use crate::category_client::CategorySource;

/// Proof that a screen is mounted. Results are only applied while the ticket
/// that requested them is still the mounted one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenTicket {
    id: u64,
    screen: Screen,
}

impl ScreenTicket {
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }
}

/// Tracks which screen currently owns the reveal stage. `0` means none.
#[derive(Debug, Default)]
struct MountRegistry {
    next_id: AtomicU64,
    current: AtomicU64,
}

/// Per-screen orchestrator of the reveal flow.
///
/// On load, a continuation screen is served from the cache when its pair is
/// there. Otherwise the category is fetched once, split into the shown slice
/// and the continuation pair, and the pair is cached for the next screen.
/// Fetch failures end in `ScreenState::Failed`; nothing is raised past the
/// screen.
pub struct RevealController {
    source: Arc<dyn CategorySource>,
    cache: RevealCache,
    mounts: MountRegistry,
}

impl RevealController {
    #[must_use]
    pub fn new(source: Arc<dyn CategorySource>, cache: RevealCache) -> Self {
        Self {
            source,
            cache,
            mounts: MountRegistry::default(),
        }
    }

    #[must_use]
    pub fn cache(&self) -> &RevealCache {
        &self.cache
    }

    /// Register `screen` as the mounted screen, superseding any other.
    pub fn mount(&self, screen: Screen) -> ScreenTicket {
        let id = self.mounts.next_id.fetch_add(1, Ordering::AcqRel) + 1;
        self.mounts.current.store(id, Ordering::Release);
        tracing::debug!(%screen, ticket = id, "screen mounted");
        ScreenTicket { id, screen }
    }

    /// Release `ticket`. A ticket already superseded by a later mount is ignored.
    pub fn unmount(&self, ticket: ScreenTicket) {
        if self
            .mounts
            .current
            .compare_exchange(ticket.id, 0, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            tracing::debug!(screen = %ticket.screen, ticket = ticket.id, "screen unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self, ticket: ScreenTicket) -> bool {
        self.mounts.current.load(Ordering::Acquire) == ticket.id
    }

    /// Drive the screen behind `ticket` to a terminal state.
    ///
    /// Returns `None` when the screen was unmounted before its data arrived;
    /// such a result is dropped without touching the cache. A cached pair
    /// taken for a screen that is gone by then is put back.
    pub async fn load(&self, ticket: ScreenTicket, ctx: &SessionContext) -> Option<ScreenState> {
        if !self.is_mounted(ticket) {
            return None;
        }
        let screen = ticket.screen;
        let category = screen.category();
        let state = ScreenState::Idle;

        if !screen.is_lead() {
            match self.cache.take(category).await {
                Ok(Some(pair)) => {
                    if self.is_mounted(ticket) {
                        return Some(state.load_cached(pair));
                    }
                    // Hand the pair back for whichever screen mounts next.
                    if let Err(err) = self.cache.put(category, &pair).await {
                        tracing::warn!(%screen, error = %err, "could not return cached pair");
                    }
                    return None;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(%screen, error = %err, "cache unavailable, fetching fresh");
                }
            }
        }

        let state = state.start_loading();
        let outcome = self
            .source
            .fetch(category, ctx.subject_id(), ctx.is_duo(), ctx.time_range())
            .await;

        if !self.is_mounted(ticket) {
            tracing::debug!(%screen, ticket = ticket.id, "discarding result for unmounted screen");
            return None;
        }

        let (state, next) = state.resolve(screen, outcome);
        match next {
            Some(pair) => {
                if let Err(err) = self.cache.put(category, &pair).await {
                    tracing::warn!(%screen, error = %err, "could not cache continuation pair");
                }
            }
            // A short result still replaces whatever an earlier fetch left behind.
            None if screen.is_lead() && matches!(state, ScreenState::Loaded(_)) => {
                if let Err(err) = self.cache.evict(category).await {
                    tracing::warn!(%screen, error = %err, "could not evict stale continuation pair");
                }
            }
            None => {}
        }
        if let ScreenState::Failed(err) = &state {
            tracing::warn!(%screen, error = %err, "screen failed to load");
        }
        Some(state)
    }
}

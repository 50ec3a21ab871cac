use std::sync::Arc;

use dioxus::prelude::*;
use services::{FlowError, HistorySource, RevealController, RevealFlowService};
use wrapped_core::model::SessionContext;

pub trait UiApp: Send + Sync {
    fn reveal(&self) -> Arc<RevealController>;
    fn flow(&self) -> Arc<RevealFlowService>;
    fn history(&self) -> Arc<dyn HistorySource>;

    /// Flow persisted by a previous run, if any.
    fn resumed_flow(&self) -> Option<SessionContext>;
}

#[derive(Clone)]
pub struct AppContext {
    reveal: Arc<RevealController>,
    flow: Arc<RevealFlowService>,
    history: Arc<dyn HistorySource>,
    resumed_flow: Option<SessionContext>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            reveal: app.reveal(),
            flow: app.flow(),
            history: app.history(),
            resumed_flow: app.resumed_flow(),
        }
    }

    #[must_use]
    pub fn reveal(&self) -> Arc<RevealController> {
        Arc::clone(&self.reveal)
    }

    #[must_use]
    pub fn flow(&self) -> Arc<RevealFlowService> {
        Arc::clone(&self.flow)
    }

    #[must_use]
    pub fn history(&self) -> Arc<dyn HistorySource> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn resumed_flow(&self) -> Option<SessionContext> {
        self.resumed_flow.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The session context of the running reveal flow.
///
/// Set by the history screen when a flow starts and cleared when it ends.
/// Reveal screens take one snapshot on mount and keep it for their lifetime.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveFlow(Signal<Option<SessionContext>>);

impl ActiveFlow {
    /// Must be called from inside a component scope.
    #[must_use]
    pub fn new(initial: Option<SessionContext>) -> Self {
        Self(Signal::new(initial))
    }

    /// Current context without subscribing the caller to changes.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionContext> {
        self.0.peek().clone()
    }

    pub fn start(&mut self, ctx: SessionContext) {
        self.0.set(Some(ctx));
    }

    pub fn end(&mut self) {
        self.0.set(None);
    }

    /// Forget the persisted flow, then end it here.
    ///
    /// The in-memory flow ends even when the store could not be cleared.
    pub async fn leave(mut self, flow: &RevealFlowService) -> Result<(), FlowError> {
        let cleared = flow.clear().await;
        self.end();
        cleared
    }
}

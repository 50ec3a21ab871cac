use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    CategorySource, FetchError, HistoryError, HistorySource, RevealCache, RevealController,
    RevealFlowService,
};
use storage::repository::Storage;
use wrapped_core::model::{
    Category, CategoryResult, HistoryEntry, RankedItem, SessionContext, SubjectId, TimeRange,
};
use wrapped_core::reveal::Screen;

use crate::context::{ActiveFlow, UiApp, build_app_context};
use crate::views::{FinishedView, HistoryView, RevealView};

#[derive(Default)]
pub struct FakeCategories {
    responses: Mutex<HashMap<Category, Result<CategoryResult, FetchError>>>,
    calls: Mutex<Vec<Category>>,
}

impl FakeCategories {
    pub fn respond(&self, category: Category, outcome: Result<CategoryResult, FetchError>) {
        self.responses.lock().unwrap().insert(category, outcome);
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CategorySource for FakeCategories {
    async fn fetch(
        &self,
        category: Category,
        _subject_id: &SubjectId,
        _is_duo: bool,
        _time_range: TimeRange,
    ) -> Result<CategoryResult, FetchError> {
        self.calls.lock().unwrap().push(category);
        self.responses
            .lock()
            .unwrap()
            .get(&category)
            .cloned()
            .unwrap_or(Err(FetchError::Unreachable))
    }
}

pub struct FakeHistory {
    entries: Mutex<Result<Vec<HistoryEntry>, HistoryError>>,
}

impl FakeHistory {
    pub fn set(&self, entries: Result<Vec<HistoryEntry>, HistoryError>) {
        *self.entries.lock().unwrap() = entries;
    }
}

#[async_trait]
impl HistorySource for FakeHistory {
    async fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.entries.lock().unwrap().clone()
    }

    async fn delete(&self, id: u64) -> Result<(), HistoryError> {
        if let Ok(entries) = self.entries.lock().unwrap().as_mut() {
            entries.retain(|entry| entry.id != id);
        }
        Ok(())
    }
}

struct TestApp {
    reveal: Arc<RevealController>,
    flow: Arc<RevealFlowService>,
    history: Arc<FakeHistory>,
}

impl UiApp for TestApp {
    fn reveal(&self) -> Arc<RevealController> {
        Arc::clone(&self.reveal)
    }

    fn flow(&self) -> Arc<RevealFlowService> {
        Arc::clone(&self.flow)
    }

    fn history(&self) -> Arc<dyn HistorySource> {
        self.history.clone()
    }

    fn resumed_flow(&self) -> Option<SessionContext> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    History,
    Reveal(Screen),
    Finished,
    /// Leaves the active flow on mount and reports the outcome.
    Leave,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    flow: Option<SessionContext>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| ActiveFlow::new(props.flow.clone()));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::Reveal(screen) => rsx! { RevealView { screen } },
        ViewKind::Finished => rsx! { FinishedView {} },
        ViewKind::Leave => rsx! { LeaveFlow {} },
    }
}

#[component]
fn LeaveFlow() -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    let active = use_context::<ActiveFlow>();
    let mut done = use_signal(|| false);
    use_hook(move || {
        let flow = ctx.flow();
        spawn(async move {
            let _ = active.leave(&flow).await;
            done.set(true);
        });
    });
    let ended = active.snapshot().is_none();
    rsx! {
        p { "left: {done} ended: {ended}" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub categories: Arc<FakeCategories>,
    pub history: Arc<FakeHistory>,
    pub cache: RevealCache,
    pub flow: Arc<RevealFlowService>,
}

impl ViewHarness {
    pub fn new(view: ViewKind, flow: Option<SessionContext>) -> Self {
        let storage = Storage::in_memory();
        let categories = Arc::new(FakeCategories::default());
        let history = Arc::new(FakeHistory {
            entries: Mutex::new(Ok(Vec::new())),
        });
        let cache = RevealCache::new(Arc::clone(&storage.session));
        let reveal = Arc::new(RevealController::new(categories.clone(), cache.clone()));
        let flow_service = Arc::new(RevealFlowService::new(Arc::clone(&storage.session)));

        let app = Arc::new(TestApp {
            reveal,
            flow: Arc::clone(&flow_service),
            history: Arc::clone(&history),
        });
        let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, flow });

        Self {
            dom,
            categories,
            history,
            cache,
            flow: flow_service,
        }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Run until pending resources have resolved and re-rendered.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn solo_flow() -> SessionContext {
    SessionContext::new(SubjectId::from(42), false, TimeRange::default())
}

pub fn duo_flow() -> SessionContext {
    SessionContext::new(SubjectId::from(42), true, TimeRange::default())
}

pub fn ranked(prefix: &str, count: u32) -> CategoryResult {
    (1..=count)
        .map(|rank| {
            RankedItem::new(
                rank,
                format!("{prefix} {rank}"),
                format!("https://img/{prefix}/{rank}.png"),
                format!("{prefix} blurb {rank}"),
                None,
            )
            .unwrap()
        })
        .collect()
}

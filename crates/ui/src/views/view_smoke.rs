use services::{FetchError, HistoryError};
use wrapped_core::model::{Category, HistoryEntry};
use wrapped_core::reveal::Screen;

use super::test_harness::{ViewHarness, ViewKind, duo_flow, ranked, solo_flow};

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_entries() {
    let mut harness = ViewHarness::new(ViewKind::History, None);
    harness.history.set(Ok(vec![
        HistoryEntry { id: 11, is_duo: false },
        HistoryEntry { id: 12, is_duo: true },
    ]));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Past Roasts"), "missing title in {html}");
    assert!(html.contains("history-entry history-solo"), "missing solo entry in {html}");
    assert!(html.contains("history-entry history-duo"), "missing duo entry in {html}");
    assert!(html.contains("Last 6 months"), "missing time range select in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_no_history_message() {
    let mut harness = ViewHarness::new(ViewKind::History, None);
    harness.history.set(Err(HistoryError::NoHistory));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No history for this account. Go create a roast!"),
        "missing no-history message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn reveal_view_smoke_renders_ranked_cards_and_caches_pair() {
    let mut harness = ViewHarness::new(ViewKind::Reveal(Screen::FIRST), Some(solo_flow()));
    harness
        .categories
        .respond(Category::Artists, Ok(ranked("Artist", 5)));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Top Artists"), "missing title in {html}");
    assert!(html.contains("Artist 1"), "missing first card in {html}");
    assert!(html.contains("Artist 2"), "missing second card in {html}");
    assert!(!html.contains("Artist 3"), "third item leaked into lead screen: {html}");
    assert!(html.contains("data-state=\"loaded\""), "missing loaded state in {html}");

    let pair = harness
        .cache
        .take(Category::Artists)
        .await
        .unwrap()
        .expect("continuation pair cached");
    assert_eq!(pair[0].rank(), 3);
    assert_eq!(pair[1].rank(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn reveal_view_smoke_renders_duo_comparison() {
    let mut harness = ViewHarness::new(
        ViewKind::Reveal(Screen::lead(Category::Tracks)),
        Some(duo_flow()),
    );
    harness
        .categories
        .respond(Category::Tracks, Ok(ranked("Song", 2)));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("class=\"comparison\""), "missing comparison in {html}");
    assert!(html.contains("Song 1"), "missing subject in {html}");
    assert!(html.contains("Song 2"), "missing partner in {html}");
    assert!(html.contains("Song blurb 1"), "missing caption in {html}");
    assert!(!html.contains("ranked-card"), "duo rendered ranked cards: {html}");
    assert!(harness.cache.take(Category::Tracks).await.unwrap().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn reveal_view_smoke_renders_placeholder_on_failure() {
    let mut harness = ViewHarness::new(
        ViewKind::Reveal(Screen::lead(Category::Genres)),
        Some(solo_flow()),
    );
    harness
        .categories
        .respond(Category::Genres, Err(FetchError::ServerError(503)));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("data-state=\"failed\""), "missing failed state in {html}");
    assert!(html.contains("Loading genres..."), "missing placeholder in {html}");
    assert!(!html.contains("503"), "raw error leaked into view: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn continuation_screen_is_served_from_cache() {
    let mut harness = ViewHarness::new(
        ViewKind::Reveal(Screen::continuation(Category::Artists)),
        Some(solo_flow()),
    );
    let items = ranked("Artist", 4);
    let pair = [items[2].clone(), items[3].clone()];
    harness.cache.put(Category::Artists, &pair).await.unwrap();

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Artist 3"), "missing cached card in {html}");
    assert!(html.contains("Artist 4"), "missing cached card in {html}");
    assert!(html.contains("#3"), "ranks should continue from 3: {html}");
    assert_eq!(harness.categories.calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn reveal_view_without_flow_does_not_fetch() {
    let mut harness = ViewHarness::new(ViewKind::Reveal(Screen::FIRST), None);

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("reveal-stage"), "stage rendered without a flow: {html}");
    assert_eq!(harness.categories.calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn finished_view_clears_persisted_flow() {
    let mut harness = ViewHarness::new(ViewKind::Finished, Some(solo_flow()));
    harness.flow.begin(&solo_flow()).await.unwrap();

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Back to history"), "missing back button in {html}");
    let err = harness.flow.current().await.unwrap_err();
    assert!(err.is_not_initialized());
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_offers_resume_for_active_flow() {
    let mut harness = ViewHarness::new(ViewKind::History, Some(solo_flow()));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Resume last roast"), "missing resume button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_flow_clears_store_before_ending() {
    let mut harness = ViewHarness::new(ViewKind::Leave, Some(solo_flow()));
    harness.flow.begin(&solo_flow()).await.unwrap();

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("left: true ended: true"), "flow not left in {html}");
    let err = harness.flow.current().await.unwrap_err();
    assert!(err.is_not_initialized());
}

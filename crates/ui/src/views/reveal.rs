use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::ScreenState;
use wrapped_core::model::SessionContext;
use wrapped_core::reveal::{Screen, advance};

use crate::context::{ActiveFlow, AppContext};
use crate::routes::Route;
use crate::views::components::{ComparisonCard, LoadingPlaceholder, RankedCard};
use crate::vm::{RevealBodyVm, RevealScreenVm, map_reveal_screen};

/// One screen of the reveal flow.
///
/// Without an active flow there is nothing to reveal, so the user is sent
/// back to the history screen.
#[component]
pub fn RevealView(screen: Screen) -> Element {
    let active = use_context::<ActiveFlow>();
    let session = use_hook(|| active.snapshot());

    match session {
        Some(session) => rsx! {
            // Keyed so every screen gets a fresh mount and its own ticket.
            for screen in std::iter::once(screen) {
                RevealStage { key: "{screen}", screen, session: session.clone() }
            }
        },
        None => rsx! {
            RedirectToEntry {}
        },
    }
}

#[component]
fn RedirectToEntry() -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        tracing::info!("no active flow, returning to history");
        navigator.replace(Route::History {});
    });
    rsx! {
        p { class: "placeholder", "Pick a roast to start." }
    }
}

#[component]
fn RevealStage(screen: Screen, session: SessionContext) -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveFlow>();
    let navigator = use_navigator();
    let controller = ctx.reveal();
    let flow_service = ctx.flow();

    let ticket = use_hook({
        let controller = controller.clone();
        move || controller.mount(screen)
    });
    use_drop({
        let controller = controller.clone();
        move || controller.unmount(ticket)
    });

    let is_duo = session.is_duo();
    let load = use_resource(move || {
        let controller = controller.clone();
        let session = session.clone();
        async move { controller.load(ticket, &session).await }
    });

    // A discarded result leaves the screen as it was: loading.
    let state = load
        .read()
        .clone()
        .flatten()
        .unwrap_or(ScreenState::Loading);
    let RevealScreenVm {
        title,
        state: state_tag,
        body,
    } = map_reveal_screen(screen, is_duo, &state);

    let on_advance = move |_: MouseEvent| match advance(screen) {
        Some(next) => {
            navigator.push(Route::Reveal { screen: next });
        }
        None => {
            navigator.push(Route::Finished {});
        }
    };

    let on_exit = move |_: MouseEvent| {
        let flow_service = flow_service.clone();
        // Navigation drops this scope, so it waits until the flow is cleared.
        spawn(async move {
            if let Err(err) = active.leave(&flow_service).await {
                tracing::warn!(error = %err, "could not clear flow on exit");
            }
            navigator.replace(Route::History {});
        });
    };

    rsx! {
        section { class: "reveal",
            h2 { "{title}" }
            div {
                class: "reveal-stage",
                "data-state": "{state_tag}",
                onclick: on_advance,
                match body {
                    RevealBodyVm::Ranked(cards) => rsx! {
                        for card in cards {
                            RankedCard { key: "{card.rank}", card }
                        }
                    },
                    RevealBodyVm::Comparison(comparison) => rsx! {
                        ComparisonCard { comparison }
                    },
                    RevealBodyVm::Placeholder { label } => rsx! {
                        LoadingPlaceholder { label }
                    },
                }
            }
            p { class: "hint", "Tap the cards to continue" }
            button { class: "exit", onclick: on_exit, "Exit" }
        }
    }
}

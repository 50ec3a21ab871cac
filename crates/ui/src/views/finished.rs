use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{ActiveFlow, AppContext};
use crate::routes::Route;

/// End of the reveal flow. The flow is cleared as soon as this screen shows.
#[component]
pub fn FinishedView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveFlow>();
    let navigator = use_navigator();
    let flow_service = ctx.flow();

    // Not tied to this scope: leaving the screen must not cancel the clear.
    use_effect(move || {
        let flow_service = flow_service.clone();
        spawn_forever(async move {
            if let Err(err) = active.leave(&flow_service).await {
                tracing::warn!(error = %err, "could not clear finished flow");
            }
        });
    });

    rsx! {
        div { class: "page finished",
            h2 { "That's a wrap" }
            p { "Thanks for looking back with us." }
            button {
                onclick: move |_| {
                    navigator.push(Route::History {});
                },
                "Back to history"
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use wrapped_core::model::{SessionContext, TimeRange};
use wrapped_core::reveal::Screen;

use crate::context::{ActiveFlow, AppContext};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryEntryVm, map_history_entries};

/// Parse the delete box. Only positive whole numbers are ids.
fn parse_delete_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveFlow>();
    let navigator = use_navigator();
    let history = ctx.history();
    let flow_service = ctx.flow();

    let mut time_range = use_signal(TimeRange::default);
    let mut delete_input = use_signal(String::new);
    let mut popup = use_signal(|| None::<String>);

    let list_source = history.clone();
    let mut resource = use_resource(move || {
        let history = list_source.clone();
        async move {
            let entries = history.list().await.map_err(ViewError::from)?;
            Ok::<_, ViewError>(map_history_entries(&entries))
        }
    });

    let state = view_state_from_resource(resource);
    let can_resume = active.snapshot().is_some();

    let start_flow = use_callback(move |entry: HistoryEntryVm| {
        let flow_service = flow_service.clone();
        let mut active = active;
        let session = SessionContext::new(entry.subject_id, entry.is_duo, time_range());
        spawn(async move {
            if let Err(err) = flow_service.begin(&session).await {
                tracing::warn!(error = %err, "could not persist new flow");
            }
            active.start(session);
            navigator.push(Route::Reveal {
                screen: Screen::FIRST,
            });
        });
    });

    let on_delete = move |_: MouseEvent| {
        let Some(id) = parse_delete_id(&delete_input.read()) else {
            popup.set(Some("Please enter a valid ID.".to_string()));
            return;
        };
        let history = history.clone();
        spawn(async move {
            match history.delete(id).await {
                Ok(()) => {
                    popup.set(Some(format!("Item with ID {id} deleted successfully.")));
                    delete_input.set(String::new());
                    resource.restart();
                }
                Err(err) => {
                    tracing::warn!(id, error = %err, "delete failed");
                    popup.set(Some(format!("Failed to delete item with ID {id}.")));
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Past Roasts" }
            p { "Pick a roast to relive it." }

            if can_resume {
                button {
                    class: "resume",
                    onclick: move |_| {
                        navigator.push(Route::Reveal {
                            screen: Screen::FIRST,
                        });
                    },
                    "Resume last roast"
                }
            }

            label {
                "Time range "
                select {
                    value: "{time_range}",
                    onchange: move |evt| {
                        if let Ok(range) = evt.value().parse::<TimeRange>() {
                            time_range.set(range);
                        }
                    },
                    for range in TimeRange::all() {
                        option {
                            value: "{range}",
                            selected: range == time_range(),
                            "{range.label()}"
                        }
                    }
                }
            }

            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(entries) => rsx! {
                    if entries.is_empty() {
                        p { {ViewError::NoHistory.message()} }
                    } else {
                        div { class: "history-list",
                            for entry in entries {
                                HistoryEntryButton {
                                    key: "{entry.id}",
                                    entry,
                                    on_select: start_flow,
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            div { class: "history-delete",
                input {
                    r#type: "number",
                    placeholder: "Enter ID to delete",
                    value: "{delete_input}",
                    oninput: move |evt| delete_input.set(evt.value()),
                }
                button { onclick: on_delete, "Delete" }
            }

            if let Some(message) = popup() {
                div { class: "popup",
                    span { "{message}" }
                    button { onclick: move |_| popup.set(None), "OK" }
                }
            }
        }
    }
}

#[component]
fn HistoryEntryButton(entry: HistoryEntryVm, on_select: Callback<HistoryEntryVm>) -> Element {
    let class = entry.class;
    let label = entry.label.clone();
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(entry.clone()),
            "{label}"
        }
    }
}

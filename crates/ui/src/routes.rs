use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use wrapped_core::reveal::Screen;

use crate::views::{FinishedView, HistoryView, RevealView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HistoryView)] History {},
        #[route("/wrapped/:screen", RevealView)] Reveal { screen: Screen },
        #[route("/finished", FinishedView)] Finished {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Wrapped" }
                Link { to: Route::History {}, "History" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

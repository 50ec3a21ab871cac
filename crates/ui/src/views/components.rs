use dioxus::prelude::*;

use crate::vm::{ComparisonVm, RankedCardVm};

#[component]
pub fn RankedCard(card: RankedCardVm) -> Element {
    rsx! {
        article { class: "ranked-card",
            span { class: "rank", "#{card.rank}" }
            img { src: "{card.image_url}", alt: "{card.name}" }
            h3 { "{card.name}" }
            if let Some(secondary) = card.secondary {
                p { class: "secondary", "{secondary}" }
            }
            if !card.description.is_empty() {
                p { class: "description", "{card.description}" }
            }
        }
    }
}

#[component]
pub fn ComparisonCard(comparison: ComparisonVm) -> Element {
    let ComparisonVm {
        subject,
        partner,
        caption,
    } = comparison;
    rsx! {
        article { class: "comparison",
            div { class: "comparison-sides",
                div { class: "comparison-side",
                    img { src: "{subject.image_url}", alt: "{subject.name}" }
                    h3 { "{subject.name}" }
                }
                span { "vs" }
                div { class: "comparison-side",
                    img { src: "{partner.image_url}", alt: "{partner.name}" }
                    h3 { "{partner.name}" }
                }
            }
            if !caption.is_empty() {
                p { class: "description", "{caption}" }
            }
        }
    }
}

#[component]
pub fn LoadingPlaceholder(label: String) -> Element {
    rsx! {
        p { class: "placeholder", "Loading {label}..." }
    }
}

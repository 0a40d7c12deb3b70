//! Policy card component.

use dioxus::prelude::*;

use crate::model::catalog::CardAccent;

/// A colored card naming an insurance product, optionally with its amount.
#[component]
pub fn PolicyCard(name: &'static str, amount: Option<u64>, accent: CardAccent) -> Element {
    let accent_class = accent.class();
    let amount_line = amount.map(|a| rsx! { p { "Amount: {a}" } });

    rsx! {
        article { class: "policy-card {accent_class}",
            h3 { "{name}" }
            {amount_line}
        }
    }
}

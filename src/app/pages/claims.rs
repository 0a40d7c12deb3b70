//! Claims page with the "Add Policy" reveal toggle.

use dioxus::prelude::*;

use crate::model::catalog;
use crate::ui::components::PolicyCard;

#[component]
pub fn Claims() -> Element {
    let mut show_additional = use_signal(|| false);

    rsx! {
        div { class: "page",
            h1 { "Claims" }
            div { class: "card-row",
                // The always-visible card carries no amount line.
                for (index, product) in catalog::claim_cards(show_additional()).iter().enumerate() {
                    PolicyCard {
                        key: "{product.name}",
                        name: product.name,
                        amount: (index > 0).then_some(product.amount),
                        accent: product.accent,
                    }
                }
            }
            button {
                class: "add-policy",
                onclick: move |_| {
                    if !show_additional() {
                        tracing::info!("revealing additional policy cards");
                    }
                    show_additional.set(true);
                },
                "Add Policy"
            }
        }
    }
}

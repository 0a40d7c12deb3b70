//! Policies page: the fixed product line-up.

use dioxus::prelude::*;

use crate::model::catalog::PRODUCTS;
use crate::ui::components::PolicyCard;

#[component]
pub fn Policies() -> Element {
    rsx! {
        div { class: "page",
            h1 { "Policies" }
            div { class: "card-row",
                for product in PRODUCTS.iter() {
                    PolicyCard {
                        key: "{product.name}",
                        name: product.name,
                        amount: Some(product.amount),
                        accent: product.accent,
                    }
                }
            }
        }
    }
}

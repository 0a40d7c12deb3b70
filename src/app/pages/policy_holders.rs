//! Policy Holders page: sample policyholders and their policy counts.

use dioxus::prelude::*;

use crate::model::catalog::{self, CardAccent};

#[component]
pub fn PolicyHolders() -> Element {
    let policies = catalog::sample_policies();
    let holders: Vec<_> = catalog::sample_policyholders()
        .into_iter()
        .enumerate()
        .map(|(index, holder)| {
            let count = catalog::policy_count(holder.policyholder_id, &policies);
            let accent_class = CardAccent::cycle(index).class();
            (holder, count, accent_class)
        })
        .collect();

    rsx! {
        div { class: "page",
            h1 { "Policy Holders" }
            div { class: "card-row",
                for (holder, count, accent_class) in holders {
                    article {
                        key: "{holder.policyholder_id}",
                        class: "policy-card {accent_class}",
                        h3 { "{holder.name}" }
                        p { "Born {holder.date_of_birth}" }
                        p { "Policies held: {count}" }
                    }
                }
            }
        }
    }
}

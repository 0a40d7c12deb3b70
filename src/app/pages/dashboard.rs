//! Dashboard landing page.

use dioxus::prelude::*;

use crate::app::routes::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "page",
            h1 { "Dashboard" }
            div { class: "card-row",
                Link { to: Route::Claims {}, class: "policy-card card-blue",
                    h3 { "Claims" }
                    p { "Claim details" }
                }
                Link { to: Route::Policies {}, class: "policy-card card-green",
                    h3 { "Policies" }
                    p { "Policy details" }
                }
                Link { to: Route::PolicyHolders {}, class: "policy-card card-pink",
                    h3 { "Policy Holders" }
                    p { "Policy holder details" }
                }
            }
        }
    }
}

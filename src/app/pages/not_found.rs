//! Catch-all page for unmatched paths.

use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "no route matched");

    rsx! {
        div { class: "page",
            h1 { "Page not found" }
            p { "There is nothing at {path}." }
        }
    }
}

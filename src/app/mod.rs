//! Application root and routing.

pub mod pages;
pub mod routes;

use dioxus::prelude::*;

pub use routes::Route;

/// Root component: mounts the client-side router.
pub fn App() -> Element {
    rsx! { Router::<Route> {} }
}

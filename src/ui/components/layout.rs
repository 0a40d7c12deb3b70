//! Page shell: navigation header, content outlet, footer.

use dioxus::prelude::*;

use crate::app::routes::Route;

/// App-specific rules on top of Pico CSS. Card colors are part of the
/// dashboard's visual identity and stay as literals.
const APP_STYLE: &str = r#"
    :root { --pico-font-size: 15px; }
    .page { padding: 20px; text-align: center; }
    .card-row { display: flex; gap: 20px; justify-content: center; margin-bottom: 20px; }
    .policy-card { padding: 20px; border-radius: 10px; width: 200px; text-align: center; color: black; text-decoration: none; }
    .card-blue { background-color: #ADD8E6; }
    .card-green { background-color: #90EE90; }
    .card-pink { background-color: #FFB6C1; }
    .add-policy { padding: 10px 20px; border-radius: 50px; background-color: #007bff; color: white; border: none; cursor: pointer; font-size: 16px; }
"#;

/// Layout wrapper rendered around every routed page.
#[component]
pub fn Layout() -> Element {
    let current = use_route::<Route>();
    let links = [
        (Route::Dashboard {}, "Dashboard"),
        (Route::Claims {}, "Claims"),
        (Route::Policies {}, "Policies"),
        (Route::PolicyHolders {}, "Policy Holders"),
    ];

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        document::Style { {APP_STYLE} }

        header { class: "container",
            nav {
                ul {
                    li { strong { "Insurance Dashboard" } }
                }
                ul {
                    for (route, label) in links {
                        li {
                            if route == current {
                                Link { to: route.clone(), strong { "{label}" } }
                            } else {
                                Link { to: route.clone(), "{label}" }
                            }
                        }
                    }
                }
            }
        }
        main { class: "container",
            Outlet::<Route> {}
        }
        footer { class: "container",
            small { "Insurance Dashboard (Rust)" }
        }
    }
}

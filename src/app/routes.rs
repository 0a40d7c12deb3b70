//! Client-side route table.
//!
//! Four fixed paths, no parameters, no guards. Every page renders inside the
//! shared [`Layout`] shell. Unmatched paths fall through to [`PageNotFound`].

use dioxus::prelude::*;

use crate::app::pages::{Claims, Dashboard, PageNotFound, Policies, PolicyHolders};
use crate::ui::components::Layout;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Dashboard {},
    #[route("/claims")]
    Claims {},
    #[route("/policies")]
    Policies {},
    #[route("/policy-holders")]
    PolicyHolders {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Route {
        path.parse().unwrap_or_else(|e| panic!("{path}: {e}"))
    }

    #[test]
    fn routes_print_their_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(Route::Claims {}.to_string(), "/claims");
        assert_eq!(Route::Policies {}.to_string(), "/policies");
        assert_eq!(Route::PolicyHolders {}.to_string(), "/policy-holders");
    }

    #[test]
    fn paths_resolve_to_their_views() {
        assert_eq!(parse("/"), Route::Dashboard {});
        assert_eq!(parse("/claims"), Route::Claims {});
        assert_eq!(parse("/policies"), Route::Policies {});
        assert_eq!(parse("/policy-holders"), Route::PolicyHolders {});
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            parse("/login"),
            Route::PageNotFound {
                segments: vec!["login".to_string()]
            }
        );
    }
}

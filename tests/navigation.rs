//! Route table and catalog checks through the public API.

use insurance_dashboard::app::Route;
use insurance_dashboard::model::catalog;
use insurance_dashboard::model::{validate_claim, Claim};

#[test]
fn dashboard_links_target_the_other_views() {
    assert_eq!(Route::Claims {}.to_string(), "/claims");
    assert_eq!(Route::Policies {}.to_string(), "/policies");
    assert_eq!(Route::PolicyHolders {}.to_string(), "/policy-holders");
}

#[test]
fn every_view_is_reachable_by_path() {
    for path in ["/", "/claims", "/policies", "/policy-holders"] {
        let route: Route = path.parse().unwrap_or_else(|e| panic!("{path}: {e}"));
        assert!(
            !matches!(route, Route::PageNotFound { .. }),
            "{path} should resolve to a view"
        );
        assert_eq!(route.to_string(), path);
    }
}

#[test]
fn claims_reveal_is_idempotent() {
    assert_eq!(catalog::claim_cards(false).len(), 1);
    assert_eq!(catalog::claim_cards(true).len(), 3);
    assert_eq!(catalog::claim_cards(true), catalog::claim_cards(true));
}

#[test]
fn sample_claim_within_sample_coverage_is_accepted() {
    let policies = catalog::sample_policies();
    let claim = Claim {
        claim_id: 1,
        policy_id: policies[0].policy_id,
        amount: policies[0].coverage_amount,
        date_of_claim: policies[0].start_date,
    };
    assert_eq!(validate_claim(&claim, &policies), Ok(()));
}

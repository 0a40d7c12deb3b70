//! Fixed display data backing the views.
//!
//! The dashboard renders a hardcoded product line-up and a handful of sample
//! policyholders. Everything here is a literal; there is no store behind it.

use chrono::NaiveDate;

use crate::model::entities::{Policy, Policyholder};

/// Accent color for a card, mapped to a stylesheet class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Blue,
    Green,
    Pink,
}

impl CardAccent {
    /// Accent for the n-th card in a row, repeating the palette.
    pub fn cycle(index: usize) -> Self {
        match index % 3 {
            0 => CardAccent::Blue,
            1 => CardAccent::Green,
            _ => CardAccent::Pink,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CardAccent::Blue => "card-blue",
            CardAccent::Green => "card-green",
            CardAccent::Pink => "card-pink",
        }
    }
}

/// One insurance product as shown on the Policies and Claims views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyProduct {
    pub name: &'static str,
    pub amount: u64,
    pub accent: CardAccent,
}

/// The full product line-up, in display order.
pub const PRODUCTS: [PolicyProduct; 3] = [
    PolicyProduct {
        name: "Home Insurance",
        amount: 20000,
        accent: CardAccent::Blue,
    },
    PolicyProduct {
        name: "Car Insurance",
        amount: 10000,
        accent: CardAccent::Green,
    },
    PolicyProduct {
        name: "Life Insurance",
        amount: 50000,
        accent: CardAccent::Pink,
    },
];

/// Cards visible on the Claims view for a given toggle state: just the first
/// product until "Add Policy" reveals the rest.
pub fn claim_cards(show_additional: bool) -> &'static [PolicyProduct] {
    if show_additional {
        &PRODUCTS
    } else {
        &PRODUCTS[..1]
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded sample date")
}

/// Sample policyholders shown on the Policy Holders view.
pub fn sample_policyholders() -> Vec<Policyholder> {
    vec![
        Policyholder {
            policyholder_id: 1,
            name: "Aarav Sharma".to_string(),
            date_of_birth: date(1985, 3, 14),
        },
        Policyholder {
            policyholder_id: 2,
            name: "Meera Iyer".to_string(),
            date_of_birth: date(1992, 11, 2),
        },
        Policyholder {
            policyholder_id: 3,
            name: "Rohan Desai".to_string(),
            date_of_birth: date(1978, 7, 30),
        },
    ]
}

/// Sample policies owned by the sample policyholders.
pub fn sample_policies() -> Vec<Policy> {
    vec![
        Policy {
            policy_id: 101,
            policyholder_id: 1,
            coverage_amount: 20000,
            start_date: date(2024, 1, 1),
            end_date: date(2025, 1, 1),
        },
        Policy {
            policy_id: 102,
            policyholder_id: 1,
            coverage_amount: 10000,
            start_date: date(2024, 4, 1),
            end_date: date(2025, 4, 1),
        },
        Policy {
            policy_id: 103,
            policyholder_id: 2,
            coverage_amount: 50000,
            start_date: date(2023, 9, 15),
            end_date: date(2026, 9, 15),
        },
    ]
}

/// Number of sample policies held by a policyholder.
pub fn policy_count(policyholder_id: u32, policies: &[Policy]) -> usize {
    policies
        .iter()
        .filter(|p| p.policyholder_id == policyholder_id)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::validation::validate_policy;

    #[test]
    fn product_amounts_match_the_line_up() {
        let amounts: Vec<u64> = PRODUCTS.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![20000, 10000, 50000]);
    }

    #[test]
    fn claims_view_starts_with_one_card() {
        let visible = claim_cards(false);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Home Insurance");
    }

    #[test]
    fn add_policy_reveals_two_more_cards() {
        let visible = claim_cards(true);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[1].name, "Car Insurance");
        assert_eq!(visible[2].name, "Life Insurance");
        // Revealing again changes nothing.
        assert_eq!(claim_cards(true), visible);
    }

    #[test]
    fn sample_policies_are_valid() {
        for policy in sample_policies() {
            assert_eq!(validate_policy(&policy), Ok(()), "policy {}", policy.policy_id);
        }
    }

    #[test]
    fn sample_policies_belong_to_sample_holders() {
        let holders = sample_policyholders();
        let policies = sample_policies();
        for policy in &policies {
            assert!(holders
                .iter()
                .any(|h| h.policyholder_id == policy.policyholder_id));
        }
        assert_eq!(policy_count(1, &policies), 2);
        assert_eq!(policy_count(3, &policies), 0);
    }
}

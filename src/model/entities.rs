//! Insurance entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person holding one or more policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policyholder {
    pub policyholder_id: u32,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// A coverage contract owned by a policyholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_id: u32,
    pub policyholder_id: u32,
    pub coverage_amount: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A claim filed against a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: u32,
    pub policy_id: u32,
    pub amount: u64,
    pub date_of_claim: NaiveDate,
}

//! Domain validation rules.

use thiserror::Error;

use crate::model::entities::{Claim, Policy};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("coverage amount must be positive")]
    NonPositiveCoverage,
    #[error("start date must be before end date")]
    InvalidPolicyPeriod,
    #[error("policy {0} not found")]
    PolicyNotFound(u32),
    #[error("claim amount {amount} exceeds policy coverage amount {coverage}")]
    ClaimExceedsCoverage { amount: u64, coverage: u64 },
}

/// A policy must carry positive coverage over a non-empty period.
pub fn validate_policy(policy: &Policy) -> Result<(), ValidationError> {
    if policy.coverage_amount == 0 {
        return Err(ValidationError::NonPositiveCoverage);
    }
    if policy.start_date >= policy.end_date {
        return Err(ValidationError::InvalidPolicyPeriod);
    }
    Ok(())
}

/// A claim must reference a known policy and stay within its coverage.
pub fn validate_claim(claim: &Claim, policies: &[Policy]) -> Result<(), ValidationError> {
    let policy = policies
        .iter()
        .find(|p| p.policy_id == claim.policy_id)
        .ok_or(ValidationError::PolicyNotFound(claim.policy_id))?;
    if claim.amount > policy.coverage_amount {
        return Err(ValidationError::ClaimExceedsCoverage {
            amount: claim.amount,
            coverage: policy.coverage_amount,
        });
    }
    Ok(())
}

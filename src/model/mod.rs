//! In-memory domain model.
//!
//! Entities and validation rules for the insurance domain, plus the fixed
//! product catalog the views render. Nothing here is persisted.

pub mod catalog;
pub mod entities;
pub mod validation;

pub use entities::{Claim, Policy, Policyholder};
pub use validation::{validate_claim, validate_policy, ValidationError};

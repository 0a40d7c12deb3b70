//! Page components, one per route.
//!
//! Pages are self-contained: they render fixed data from the model and hold
//! no state beyond what a single view needs.

mod claims;
mod dashboard;
mod not_found;
mod policies;
mod policy_holders;

pub use claims::Claims;
pub use dashboard::Dashboard;
pub use not_found::PageNotFound;
pub use policies::Policies;
pub use policy_holders::PolicyHolders;

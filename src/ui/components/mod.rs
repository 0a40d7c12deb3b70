//! Shared components used across pages.

pub mod card;
pub mod layout;

pub use card::PolicyCard;
pub use layout::Layout;

//! Insurance dashboard web UI.
//!
//! A small client-side application with four views (Dashboard, Claims,
//! Policies, Policy Holders) navigated via client-side routing. All display
//! data is defined inline; there is no backend and no persistence.

pub mod app;
pub mod model;
pub mod ui;

pub use app::App;

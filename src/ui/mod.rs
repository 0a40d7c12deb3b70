//! Shared UI building blocks.
//!
//! Using Pico CSS (classless CSS framework) for clean, accessible,
//! mobile-friendly design without custom CSS maintenance burden; the few
//! app-specific rules ride along in an inline stylesheet.

pub mod components;

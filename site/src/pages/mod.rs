//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The index page loads the content document once and hands typed slices of
//! it to each section in `components`.

pub mod error;
pub mod index;

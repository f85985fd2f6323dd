//! Utility helpers shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (listeners, storage, animation
//! frames) and pure display rules from the view code so both halves can be
//! tested without a browser.

pub mod carousel;
pub mod format;
pub mod map;
pub mod parallax;
pub mod scroll_spy;
pub mod smooth_scroll;
pub mod theme;
pub mod viewport;

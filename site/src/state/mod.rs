//! Transient UI state shared between a section and its dialogs.

pub mod dialog;

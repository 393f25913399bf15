//! Client-side UI state.
//!
//! DESIGN
//! ======
//! The page owns a single `UiState` provided through Leptos context. It holds
//! only click-driven toggles; nothing here is persisted.

pub mod accordion;
pub mod ui;

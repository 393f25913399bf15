//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections from static content and read
//! or write the shared `UiState` from Leptos context. Browser subscriptions
//! (intersection, pointer) are attached on mount and released in
//! `on_cleanup`.

pub mod assistants;
pub mod author;
pub mod button;
pub mod fade_in;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod investment;
pub mod module_panel;
pub mod nav_bar;
pub mod pain_points;
pub mod parallax;
pub mod pricing;
pub mod program;
pub mod results;
pub mod section;
pub mod ticker;

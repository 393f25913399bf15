//! Utility helpers shared across landing page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (viewport intersection, pointer
//! movement, scrolling) from component logic so the mechanisms can be tested
//! natively with fakes.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod format;
pub mod pointer;
pub mod reveal;
pub mod scroll;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::accordion::SingleExpansion;
use crate::util::scroll::SectionScroller;

/// Curriculum module expanded when the page first renders.
pub const DEFAULT_OPEN_MODULE: u32 = 1;

/// UI state for the curriculum accordion and the mobile menu.
///
/// Provided as `RwSignal<UiState>` context by the root view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub program: SingleExpansion<u32>,
    pub menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { program: SingleExpansion::new(Some(DEFAULT_OPEN_MODULE)), menu_open: false }
    }
}

impl UiState {
    pub fn toggle_module(&mut self, id: u32) {
        self.program.toggle(id);
    }

    pub fn is_module_open(&self, id: u32) -> bool {
        self.program.is_expanded(&id)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll to the section with `id` and close the mobile menu, whether or
    /// not the section exists. Returns `true` if it was found.
    pub fn navigate_to(&mut self, id: &str, scroller: &impl SectionScroller) -> bool {
        let found = scroller.scroll_to(id);
        self.close_menu();
        found
    }
}

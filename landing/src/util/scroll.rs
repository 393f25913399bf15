//! Smooth scrolling to page sections.
//!
//! Navigation buttons target sections by element id. A missing id is a
//! silent no-op. Requires a browser environment; server rendering and native
//! tests see a scroller that never finds anything.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const PROGRAM_SECTION_ID: &str = "program";
pub const RESULTS_SECTION_ID: &str = "results";
pub const PRICING_SECTION_ID: &str = "pricing";

/// Host capability that scrolls a section into view.
pub trait SectionScroller {
    /// Scroll so the element with `id` aligns with the top of the viewport.
    ///
    /// Returns `true` if the element exists.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Scrolls the live document with smooth behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_to(&self, id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(id))
            else {
                log::debug!("scroll target #{id} not found");
                return false;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            false
        }
    }
}

/// `#id` anchor for a section id.
pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

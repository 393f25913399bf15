use super::*;

#[test]
fn section_href_prefixes_hash() {
    assert_eq!(section_href(PRICING_SECTION_ID), "#pricing");
    assert_eq!(section_href(PROGRAM_SECTION_ID), "#program");
    assert_eq!(section_href(RESULTS_SECTION_ID), "#results");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_scroller_finds_nothing_outside_browser() {
    assert!(!DocumentScroller.scroll_to(PRICING_SECTION_ID));
    assert!(!DocumentScroller.scroll_to("missing"));
}

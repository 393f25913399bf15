use super::*;

#[test]
fn stagger_delay_steps_by_hundred_ms() {
    assert_eq!(stagger_delay(0), 0);
    assert_eq!(stagger_delay(1), 100);
    assert_eq!(stagger_delay(5), 500);
}

#[test]
fn stagger_delay_saturates() {
    assert_eq!(stagger_delay(usize::MAX), u32::MAX);
}

#[test]
fn fade_in_class_reflects_visibility() {
    assert_eq!(fade_in_class(false, ""), "fade-in");
    assert_eq!(fade_in_class(true, ""), "fade-in fade-in--visible");
    assert_eq!(fade_in_class(true, "hero__content"), "fade-in fade-in--visible hero__content");
}

#[test]
fn transition_delay_style_uses_milliseconds() {
    assert_eq!(transition_delay_style(300), "transition-delay: 300ms");
}

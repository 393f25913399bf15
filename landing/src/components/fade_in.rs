//! Scroll-triggered entrance transition.
//!
//! Wraps its children in a block that stays transparent and shifted down
//! until it first scrolls into view, then transitions in once. Visibility is
//! driven by [`crate::util::reveal::Revealer`]; the observer is released when
//! the component is cleaned up.

#[cfg(test)]
#[path = "fade_in_test.rs"]
mod fade_in_test;

use leptos::prelude::*;

/// Delay between consecutive cards in a staggered list.
pub const STAGGER_STEP_MS: u32 = 100;

/// Transition delay for the card at `index` in a staggered list.
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(STAGGER_STEP_MS))
}

pub fn fade_in_class(visible: bool, extra: &str) -> String {
    let state = if visible { "fade-in fade-in--visible" } else { "fade-in" };
    if extra.is_empty() { state.to_owned() } else { format!("{state} {extra}") }
}

pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms")
}

#[component]
pub fn FadeIn(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser::{IntersectionObserverAdapter, IntersectionSubscription};
        use crate::util::reveal::{REVEAL_THRESHOLD, Revealer};

        let revealer = StoredValue::new_local(None::<Revealer<IntersectionSubscription>>);
        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            if revealer.with_value(Option::is_some) {
                return;
            }
            let watch = Revealer::watch(&IntersectionObserverAdapter, &el, REVEAL_THRESHOLD, move || {
                visible.set(true);
            });
            revealer.set_value(Some(watch));
        });
        on_cleanup(move || {
            if let Some(Some(watch)) = revealer.try_update_value(Option::take) {
                watch.release();
            }
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=move || fade_in_class(visible.get(), class)
            style=transition_delay_style(delay_ms)
        >
            {children()}
        </div>
    }
}

//! Pointer-driven parallax decorations.

use leptos::prelude::*;

use crate::util::pointer::PointerPosition;

/// Normalized pointer position for decorations on the current view.
///
/// Each call owns its own tracker. In the browser it listens to window
/// `mousemove` until the calling view is cleaned up; during server rendering
/// the position stays at the centre.
pub fn use_pointer_position() -> ReadSignal<PointerPosition> {
    let position = RwSignal::new(PointerPosition::CENTER);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser::WindowPointerSource;
        use crate::util::pointer::{ListenerHandle, PointerTracker};

        let tracker = PointerTracker::new();
        tracker.subscribe(move |p| position.set(p));
        let handle = StoredValue::new_local(Some(tracker.connect(&WindowPointerSource)));
        on_cleanup(move || {
            if let Some(Some(handle)) = handle.try_update_value(Option::take) {
                handle.remove();
            }
        });
    }

    position.read_only()
}

/// Shaded sphere, offset by `transform`.
#[component]
pub fn Sphere(#[prop(optional)] class: &'static str, #[prop(optional, into)] transform: Signal<String>) -> impl IntoView {
    view! { <div class=format!("shape-sphere {class}") style=move || format!("transform: {}", transform.get())></div> }
}

/// Glass cube, offset by `transform`.
#[component]
pub fn Cube(#[prop(optional)] class: &'static str, #[prop(optional, into)] transform: Signal<String>) -> impl IntoView {
    view! {
        <div class=format!("shape-cube {class}") style=move || format!("transform: {}", transform.get())>
            <div class="shape-cube__face"></div>
        </div>
    }
}

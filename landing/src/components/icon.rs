//! Icon placeholder; glyphs come from the stylesheet.

use leptos::prelude::*;

#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <span class=format!("icon icon--{name} {class}") aria-hidden="true"></span> }
}

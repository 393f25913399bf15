//! Page section wrapper with a centred inner column.

use leptos::prelude::*;

#[component]
pub fn Section(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {class}")>
            <div class="section__inner">{children()}</div>
        </section>
    }
}

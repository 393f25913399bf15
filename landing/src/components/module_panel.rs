//! Collapsible curriculum module panel.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::Module;

pub fn panel_class(open: bool) -> &'static str {
    if open { "module-panel module-panel--open" } else { "module-panel" }
}

/// One accordion panel. Expansion is owned by the caller; clicking the header
/// only reports the click through `on_toggle`.
#[component]
pub fn ModulePanel(module: Module, #[prop(into)] is_open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <div class=move || panel_class(is_open.get())>
            <button
                class="module-panel__header"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                <div class="module-panel__heading">
                    <div class="module-panel__number">{module.id}</div>
                    <h3 class="module-panel__title">{module.title}</h3>
                </div>
                <span class="module-panel__chevron">
                    <Icon name="chevron-down"/>
                </span>
            </button>

            <div class="module-panel__body">
                <div class="module-panel__content">
                    <ul class="module-panel__points">
                        {module
                            .points
                            .iter()
                            .map(|point| {
                                view! {
                                    <li class="module-panel__point">
                                        <span class="module-panel__bullet"></span>
                                        <span>{*point}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>

                    <div class="module-panel__result">
                        <div class="module-panel__result-icon">
                            <Icon name="sparkles"/>
                        </div>
                        <div>
                            <span class="module-panel__result-label">"Результат"</span>
                            <p class="module-panel__result-text">{module.result}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

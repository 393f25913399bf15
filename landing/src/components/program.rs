//! Curriculum section: one accordion panel per module.

use leptos::prelude::*;

use crate::components::module_panel::ModulePanel;
use crate::components::section::Section;
use crate::content::PROGRAM_MODULES;
use crate::state::ui::UiState;
use crate::util::scroll::PROGRAM_SECTION_ID;

#[component]
pub fn ProgramSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Section id=PROGRAM_SECTION_ID class="program">
            <div class="program__header">
                <span class="program__eyebrow">"Структура"</span>
                <h2 class="section-title">"Программа обучения"</h2>
            </div>
            <div class="program__modules">
                {PROGRAM_MODULES
                    .iter()
                    .map(|module| {
                        let id = module.id;
                        let is_open = Signal::derive(move || ui.with(|u| u.is_module_open(id)));
                        let on_toggle = Callback::new(move |()| ui.update(|u| u.toggle_module(id)));
                        view! { <ModulePanel module=*module is_open=is_open on_toggle=on_toggle/> }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

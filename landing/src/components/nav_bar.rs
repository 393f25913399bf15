//! Fixed top navigation with the mobile menu overlay.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::button::Button;
use crate::components::icon::Icon;
use crate::content::{BRAND, CHOOSE_TARIFF, NAV_LINKS};
use crate::state::ui::UiState;
use crate::util::scroll::section_href;

pub fn overlay_class(open: bool) -> &'static str {
    if open { "mobile-menu mobile-menu--open" } else { "mobile-menu" }
}

/// Top navigation bar.
///
/// `on_choose_tariff` scrolls to pricing; it is shared with the hero button.
#[component]
pub fn NavBar(on_choose_tariff: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.with(|u| u.menu_open);
    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand">
                    <div class="nav__logo">
                        <Icon name="bot"/>
                    </div>
                    <span class="nav__title">{BRAND}</span>
                </div>

                <div class="nav__desktop">
                    <div class="nav__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=section_href(link.section_id) class="nav__link">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="nav__cta" on:click=move |_| on_choose_tariff.run(())>
                        {CHOOSE_TARIFF}
                    </button>
                </div>

                <div class="nav__mobile-toggle">
                    <button class="nav__menu-button" aria-label="Меню" on:click=on_toggle_menu>
                        {move || {
                            if menu_open() {
                                view! { <Icon name="x"/> }.into_any()
                            } else {
                                view! { <Icon name="layers" class="icon--rotated"/> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <div class=move || overlay_class(menu_open())>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=section_href(link.section_id)
                                class="mobile-menu__link"
                                on:click=move |_| ui.update(UiState::close_menu)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
                <Button on_click=on_choose_tariff>{CHOOSE_TARIFF}</Button>
            </div>
        </nav>
    }
}

//! Page footer.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::BRAND;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <Icon name="bot"/>
                    </div>
                    <span class="footer__title">{BRAND}</span>
                </div>
                <div class="footer__links">
                    <a href="#" class="footer__link">"Оферта"</a>
                    <a href="#" class="footer__link">"Политика конфиденциальности"</a>
                </div>
                <div class="footer__copyright">
                    "© 2025. Сделано с " <Icon name="heart" class="footer__heart"/> " и ИИ"
                </div>
            </div>
        </footer>
    }
}

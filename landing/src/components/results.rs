//! Results bento grid.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::parallax::Sphere;
use crate::components::section::Section;
use crate::util::scroll::RESULTS_SECTION_ID;

/// Placeholder avatars stacked on the large card.
const AVATAR_STACK: usize = 3;

#[component]
pub fn ResultsSection() -> impl IntoView {
    view! {
        <Section id=RESULTS_SECTION_ID class="results">
            <div class="results__header">
                <h2 class="section-title">
                    "Что будет " <span class="text-accent">"на выходе"</span>
                </h2>
                <p class="section-lead">"Твой результат после 8 недель плотной работы."</p>
            </div>

            <div class="results__bento">
                <div class="bento-card bento-card--large">
                    <div class="bento-card__glow"></div>
                    <Sphere class="bento-card__sphere"/>
                    <div class="bento-card__body">
                        <div>
                            <div class="bento-card__icon">
                                <Icon name="bot"/>
                            </div>
                            <h3 class="bento-card__title">"Твоя нейросеть"</h3>
                            <p class="bento-card__text">
                                "Настроена под тебя, говорит твоими словами. Ты перестаешь писать шаблонно."
                            </p>
                        </div>
                        <div class="bento-card__avatars">
                            {(0..AVATAR_STACK)
                                .map(|_| {
                                    view! {
                                        <div class="bento-card__avatar">
                                            <div class="bento-card__avatar-dot"></div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="bento-card bento-card--content">
                    <div class="bento-card__icon">
                        <Icon name="trending-up"/>
                    </div>
                    <Icon name="trending-up" class="bento-card__watermark"/>
                    <h4 class="bento-card__title">"Контент"</h4>
                    <p class="bento-card__text">"Стабильно создаётся, качественно и с твоими смыслами."</p>
                </div>

                <div class="bento-card bento-card--you">
                    <div class="bento-card__glow"></div>
                    <h4 class="bento-card__title">"Ты"</h4>
                    <p class="bento-card__text">"Чувствуешь опору, ясность и контроль над своим блогом."</p>
                </div>
            </div>

            <div class="results__row">
                <div class="results__wide-card">
                    <div class="results__wide-icon">
                        <Icon name="layers"/>
                    </div>
                    <p>"Прогревы собраны в воронку, структура выстроена"</p>
                </div>
                <div class="results__wide-card">
                    <div class="results__wide-icon">
                        <Icon name="video"/>
                    </div>
                    <p>"Видео, визуал, сторис делаются быстрее и лучше, чем вручную"</p>
                </div>
            </div>
        </Section>
    }
}

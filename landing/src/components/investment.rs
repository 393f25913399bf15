//! Work format and investment comparison.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::parallax::Sphere;
use crate::components::section::Section;
use crate::content::{BRAND, COST_COMPARISON, FORMAT_POINTS};
use crate::util::pointer::{FORMAT_SPHERE_SCALE, PointerPosition};

#[component]
pub fn InvestmentSection(#[prop(into)] pointer: Signal<PointerPosition>) -> impl IntoView {
    let sphere = Signal::derive(move || pointer.get().translate(FORMAT_SPHERE_SCALE));

    view! {
        <Section class="investment">
            <div class="investment__decoration">
                <Sphere class="investment__sphere" transform=sphere/>
            </div>

            <div class="investment__grid">
                <div class="investment__format">
                    <h3 class="investment__title">"Формат работы"</h3>
                    <div class="investment__points">
                        {FORMAT_POINTS
                            .iter()
                            .map(|point| {
                                view! {
                                    <div class="investment__point">
                                        <div class="investment__check">
                                            <Icon name="check"/>
                                        </div>
                                        <p>{*point}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="investment__note">
                        <div class="investment__note-bar"></div>
                        "На рынке полно курсов, где тебе продают доступ к видео. Это не тот случай. "
                        <span class="text-accent">"ЭТО НЕ ОБУЧЕНИЕ, А ВНЕДРЕНИЕ."</span>
                    </div>
                </div>

                <div class="investment__card">
                    <div class="investment__card-glow"></div>
                    <div class="investment__card-glow investment__card-glow--alt"></div>
                    <div class="investment__card-body">
                        <h3 class="investment__title">"Твоя инвестиция в свободу"</h3>
                        <div class="investment__comparison">
                            <p class="investment__intro">"Давай на чистоту."</p>
                            {COST_COMPARISON
                                .iter()
                                .map(|line| {
                                    view! {
                                        <div class="investment__cost">
                                            <span>{line.label}</span>
                                            <span class="investment__cost-value">{line.cost}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                            <div class="investment__ours">
                                <div class="investment__ours-bar"></div>
                                <div class="investment__cost">
                                    <span class="investment__brand">{BRAND}</span>
                                    <span class="investment__cost-value">"Единоразовый платёж"</span>
                                </div>
                                <p class="investment__summary">
                                    "Ты один раз инвестируешь в систему, которая останется с тобой навсегда."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

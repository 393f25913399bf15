//! "Who is this for" section: pain point cards with staggered fade-in.

use leptos::prelude::*;

use crate::components::fade_in::{FadeIn, stagger_delay};
use crate::components::icon::Icon;
use crate::components::section::Section;
use crate::content::PAIN_POINTS;

#[component]
pub fn PainPointsSection() -> impl IntoView {
    view! {
        <Section class="pain-points">
            <div class="pain-points__grid-bg"></div>
            <div class="pain-points__header">
                <div>
                    <h2 class="section-title">
                        "Для кого " <span class="text-accent">"эта программа?"</span>
                    </h2>
                    <p class="section-lead">
                        "Ты эксперт, продюсер, маркетолог и тебе откликается одно из этого:"
                    </p>
                </div>
                <div class="pain-points__ornament">
                    <div class="pain-points__ornament-ring"></div>
                    <Icon name="star"/>
                </div>
            </div>

            <div class="pain-points__cards">
                {PAIN_POINTS
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        view! {
                            <FadeIn delay_ms=stagger_delay(idx)>
                                <div class="pain-card">
                                    <div class="pain-card__icon">
                                        <Icon name="x-circle"/>
                                    </div>
                                    <p class="pain-card__text">{item.text}</p>
                                </div>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="pain-points__quote">
                <p>
                    "«Ты уходишь с каждого созвона не с кашей в голове, а с "
                    <span class="text-accent">"готовым постом, сценарием или частью воронки"</span>
                    ". Ты платишь за внедрение ИИ в твой блог, а не за информацию.»"
                </p>
            </div>
        </Section>
    }
}

//! Author section: photo, credentials and short bio.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section::Section;
use crate::content::{AUTHOR_HANDLE, AUTHOR_NAME, AUTHOR_PHOTO_URL, AUTHOR_STATS};

#[component]
pub fn AuthorSection() -> impl IntoView {
    view! {
        <Section class="author">
            <div class="author__card">
                <div class="author__glow author__glow--lime"></div>
                <div class="author__glow author__glow--purple"></div>

                <div class="author__media">
                    <div class="author__photo-frame">
                        <div class="author__photo-shade"></div>
                        <img src=AUTHOR_PHOTO_URL alt="Автор курса" class="author__photo"/>
                        <div class="author__caption">
                            <p class="author__handle">{AUTHOR_HANDLE}</p>
                            <h3 class="author__name">{AUTHOR_NAME}</h3>
                        </div>
                    </div>
                    <div class="author__badge">
                        <div class="author__badge-icon">
                            <Icon name="shield-check"/>
                        </div>
                        <div>
                            <p class="author__badge-label">"Опыт"</p>
                            <p class="author__badge-value">"4+ года"</p>
                        </div>
                    </div>
                </div>

                <div class="author__body">
                    <h2 class="section-title">
                        "Кто ведет " <span class="text-accent">"программу?"</span>
                    </h2>
                    <p class="author__bio">
                        "Я не просто теоретик, а практик, который ежедневно использует нейросети для запуска "
                        "проектов, создания контента и автоматизации рутины. Моя цель — передать вам не просто "
                        "\"промты\", а " <span class="text-accent">"систему мышления"</span> "."
                    </p>
                    <div class="author__stats">
                        {AUTHOR_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="author__stat">
                                        <Icon name=stat.icon class=stat.accent.class()/>
                                        <div>
                                            <div class="author__stat-value">{stat.value}</div>
                                            <div class="author__stat-label">{stat.label}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="author__signature">
                        <div class="author__signature-line"></div>
                        <span>"Alex Neuro"</span>
                    </div>
                </div>
            </div>
        </Section>
    }
}

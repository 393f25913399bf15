//! GPT assistants grid.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::section::Section;
use crate::content::{ASSISTANTS, ASSISTANTS_TOTAL};

#[component]
pub fn AssistantsSection() -> impl IntoView {
    view! {
        <Section class="assistants">
            <div class="assistants__bg"></div>
            <div class="assistants__header">
                <h2 class="section-title">
                    "Какие " <span class="text-accent">"GPT-ассистенты"</span> <br/> " ты получишь:"
                </h2>
                <div class="assistants__count">{format!("{ASSISTANTS_TOTAL} авторских GPT в комплекте")}</div>
            </div>
            <div class="assistants__grid">
                {ASSISTANTS
                    .iter()
                    .map(|assistant| {
                        view! {
                            <div class="assistant-card">
                                <div class="assistant-card__top">
                                    <div class="assistant-card__icon">
                                        <Icon name="bot"/>
                                    </div>
                                    <Icon name="arrow-right" class="assistant-card__arrow"/>
                                </div>
                                <h3 class="assistant-card__name">{assistant.name}</h3>
                                <p class="assistant-card__description">{assistant.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

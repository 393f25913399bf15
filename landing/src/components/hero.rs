//! Hero block with parallax decorations and headline stats.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::fade_in::FadeIn;
use crate::components::icon::Icon;
use crate::components::parallax::{Cube, Sphere};
use crate::content::{CHOOSE_TARIFF, HERO_STATS, START_BADGE};
use crate::util::pointer::{HERO_CUBE_SCALE, HERO_GLOW_SCALE, HERO_SPHERE_SCALE, PointerPosition};
use crate::util::scroll::{PROGRAM_SECTION_ID, section_href};

/// Fixed tilt applied to the hero cube on top of its parallax offset.
const CUBE_TILT: &str = "rotate(15deg)";

#[component]
pub fn Hero(#[prop(into)] pointer: Signal<PointerPosition>, on_choose_tariff: Callback<()>) -> impl IntoView {
    let sphere = Signal::derive(move || pointer.get().translate(HERO_SPHERE_SCALE));
    let cube = Signal::derive(move || format!("{} {CUBE_TILT}", pointer.get().translate(HERO_CUBE_SCALE)));
    let glow = move || format!("transform: {}", pointer.get().translate(HERO_GLOW_SCALE));

    view! {
        <div class="hero">
            <div class="hero__ambience">
                <div class="hero__blob hero__blob--purple"></div>
                <div class="hero__blob hero__blob--pink"></div>
            </div>

            <div class="hero__decorations">
                <Sphere class="hero__sphere" transform=sphere/>
                <Cube class="hero__cube" transform=cube/>
                <div class="hero__glow" style=glow></div>
            </div>

            <div class="hero__content">
                <FadeIn>
                    <div class="hero__badge">
                        <span class="hero__badge-dot"></span>
                        <span>{START_BADGE}</span>
                    </div>

                    <h1 class="hero__title">
                        <span class="hero__title-line">"Системный и"</span>
                        <br/>
                        <span class="hero__title-accent">
                            "продающий блог"
                            <svg class="hero__underline" viewBox="0 0 200 9" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path
                                    d="M2.00025 6.99997C35.5002 2.99998 150.5 -2.00002 198 3.99998"
                                    stroke="currentColor"
                                    stroke-width="3"
                                ></path>
                            </svg>
                        </span>
                        <br/>
                        <span class="hero__title-line">"с ChatGPT"</span>
                    </h1>

                    <p class="hero__lead">
                        "Внедри ИИ в свой блог и начни СИСТЕМНО делать контент для соц.сетей, "
                        "который приводит клиентов на услуги или инфопродукты."
                    </p>

                    <div class="hero__actions">
                        <Button on_click=on_choose_tariff class="hero__cta">{CHOOSE_TARIFF}</Button>
                        <div class="hero__program-link">
                            <Icon name="play-circle"/>
                            <a href=section_href(PROGRAM_SECTION_ID)>"Программа обучения"</a>
                        </div>
                    </div>

                    <div class="hero__stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="hero__stat">
                                        <Icon name=stat.icon class=stat.accent.class()/>
                                        <span class="hero__stat-value">{stat.value}</span>
                                        <span class="hero__stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </FadeIn>
            </div>
        </div>
    }
}

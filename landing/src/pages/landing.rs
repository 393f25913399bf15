//! Landing page: every section of the course site in display order.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the pointer subscription for the parallax decorations and
//! the scroll-to-pricing action shared by the navigation and hero buttons.

use leptos::prelude::*;

use crate::components::assistants::AssistantsSection;
use crate::components::author::AuthorSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::investment::InvestmentSection;
use crate::components::nav_bar::NavBar;
use crate::components::pain_points::PainPointsSection;
use crate::components::parallax::use_pointer_position;
use crate::components::pricing::PricingSection;
use crate::components::program::ProgramSection;
use crate::components::results::ResultsSection;
use crate::components::ticker::Ticker;
use crate::state::ui::UiState;
use crate::util::scroll::{DocumentScroller, PRICING_SECTION_ID};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pointer = use_pointer_position();

    let choose_tariff = Callback::new(move |()| {
        ui.update(|u| {
            u.navigate_to(PRICING_SECTION_ID, &DocumentScroller);
        });
    });

    view! {
        <div class="landing">
            <div class="landing__noise"></div>
            <NavBar on_choose_tariff=choose_tariff/>
            <Hero pointer=pointer on_choose_tariff=choose_tariff/>
            <Ticker/>
            <PainPointsSection/>
            <AuthorSection/>
            <ProgramSection/>
            <ResultsSection/>
            <AssistantsSection/>
            <InvestmentSection pointer=pointer/>
            <PricingSection/>
            <Footer/>
        </div>
    }
}

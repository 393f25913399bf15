//! Pricing tier cards.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icon::Icon;
use crate::components::section::Section;
use crate::content::{PRICING_TIERS, PricingTier};
use crate::util::format::{FeatureLine, group_digits};
use crate::util::scroll::PRICING_SECTION_ID;

pub fn tier_class(popular: bool) -> &'static str {
    if popular { "tier tier--popular" } else { "tier" }
}

pub fn tier_button_variant(popular: bool) -> ButtonVariant {
    if popular { ButtonVariant::White } else { ButtonVariant::Soft }
}

pub fn feature_class(line: &FeatureLine, popular: bool) -> &'static str {
    match (line.included, popular) {
        (false, _) => "tier__feature-text tier__feature-text--excluded",
        (true, true) => "tier__feature-text tier__feature-text--popular",
        (true, false) => "tier__feature-text",
    }
}

pub fn spots_label(tier: &PricingTier) -> Option<String> {
    tier.spots.map(|spots| format!("Мест: {spots}"))
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    let popular = tier.popular;

    view! {
        <div class=tier_class(popular)>
            {popular
                .then(|| {
                    view! {
                        <div class="tier__hit">
                            <Icon name="sparkles"/>
                            "ХИТ"
                        </div>
                    }
                })}
            <div class="tier__header">
                <h3 class="tier__name">{tier.name}</h3>
                {spots_label(&tier).map(|label| view! { <div class="tier__spots">{label}</div> })}
            </div>
            <div class="tier__prices">
                <div class="tier__old-price">{group_digits(tier.old_price)}</div>
                <div class="tier__price-row">
                    <span class="tier__price">
                        {group_digits(tier.price)} " " <span class="tier__currency">"₽"</span>
                    </span>
                    <span class="tier__price-eur">{format!("/ {} €", tier.price_eur)}</span>
                </div>
            </div>
            <ul class="tier__features">
                {tier
                    .features
                    .iter()
                    .map(|raw| {
                        let line = FeatureLine::parse(raw);
                        let class = feature_class(&line, popular);
                        let marker = if line.included {
                            view! {
                                <div class="tier__check">
                                    <Icon name="check"/>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <Icon name="x" class="tier__cross"/> }.into_any()
                        };
                        view! {
                            <li class="tier__feature">
                                {marker}
                                <span class=class>{line.text}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Button variant=tier_button_variant(popular) class="tier__button">
                {tier.button_text}
            </Button>
        </div>
    }
}

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <Section id=PRICING_SECTION_ID class="pricing">
            <div class="pricing__header">
                <h2 class="section-title">"Тарифы"</h2>
                <p class="pricing__installments">
                    "❗️Оплату можно разделить на 2 платежа: 50% сразу и 50% через месяц."
                </p>
            </div>
            <div class="pricing__tiers">
                {PRICING_TIERS.iter().map(|tier| view! { <TierCard tier=*tier/> }).collect_view()}
            </div>
        </Section>
    }
}

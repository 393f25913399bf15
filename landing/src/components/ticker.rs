//! Scrolling keyword marquee.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::content::{TICKER_ITEMS, TICKER_REPEAT};

#[component]
pub fn Ticker() -> impl IntoView {
    view! {
        <div class="ticker">
            <div class="ticker__track">
                {(0..TICKER_REPEAT)
                    .map(|_| {
                        view! {
                            <div class="ticker__group">
                                {TICKER_ITEMS
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class="ticker__item">
                                                <span class="ticker__word">{*item}</span>
                                                <Icon name="star"/>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

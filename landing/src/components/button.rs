//! Call-to-action button with style variants.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    White,
    Soft,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "button button--primary",
            Self::Outline => "button button--outline",
            Self::White => "button button--white",
            Self::Soft => "button button--soft",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let on_click = move |_| {
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    view! {
        <button class=format!("{} {class}", variant.class()) on:click=on_click>
            <span class="button__shine"></span>
            <span class="button__label">{children()}</span>
        </button>
    }
}

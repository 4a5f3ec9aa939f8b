//! Typography fragments shared by the accordion bodies.

use leptos::prelude::*;
use pipeguide_core::{FontScale, Theme, FONT_TOGGLE_LABEL};

/// Paragraph whose size follows the shared font scale.
#[component]
pub fn ScaledText(
    text: &'static str,
    font_scale: Signal<FontScale>,
    #[prop(into)] color: String,
) -> impl IntoView {
    view! {
        <p
            data-variant=move || font_scale.get().variant().name()
            style=move || format!("color: {color}; {}", font_scale.get().variant().style())
        >
            {text}
        </p>
    }
}

/// Bold heading with an accent circle just behind its left edge.
#[component]
pub fn EmphasizedText(children: Children, theme: Theme) -> impl IntoView {
    view! {
        <span class="emphasized" style=format!("--round: {}", theme.round)>
            {children()}
        </span>
    }
}

/// Ordered list numbered "1.", "2.", ... in the primary color.
#[component]
pub fn NumberedList(children: Children, theme: Theme) -> impl IntoView {
    view! {
        <ol class="numbered-list" style=format!("--marker: {}", theme.primary)>
            {children()}
        </ol>
    }
}

#[component]
pub fn FontToggleButton(on_toggle: Callback<()>, theme: Theme) -> impl IntoView {
    view! {
        <div class="flex justify-end">
            <button
                type="button"
                class="contained-button"
                style=format!("background-color: {}", theme.primary)
                on:click=move |_| on_toggle.run(())
            >
                {FONT_TOGGLE_LABEL}
            </button>
        </div>
    }
}

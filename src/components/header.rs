use leptos::prelude::*;
use pipeguide_core::{HeaderLabels, Theme};

/// Title banner. Narrow viewports get the title on two lines.
#[component]
pub fn HeaderBanner(labels: Signal<HeaderLabels>, theme: Theme) -> impl IntoView {
    view! {
        <header
            class="flex items-center justify-center h-[10vh] mb-2 py-2 text-white"
            style=format!("background-color: {}", theme.primary)
        >
            <h1 class="text-center text-3xl font-normal leading-tight">
                {move || labels.get().line1}
                <br />
                {move || labels.get().line2}
            </h1>
        </header>
    }
}

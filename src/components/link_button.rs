use leptos::prelude::*;
use pipeguide_core::{open_link, LinkTarget, Links, Theme};

use crate::navigation::BrowserNavigator;

/// Contained button that opens `target` in a new tab.
#[component]
pub fn LinkButton(target: LinkTarget, links: Links, theme: Theme) -> impl IntoView {
    view! {
        <button
            type="button"
            class="contained-button"
            style=format!("background-color: {}", theme.primary)
            on:click=move |_| open_link(&BrowserNavigator, &links, target)
        >
            {target.label()}
        </button>
    }
}

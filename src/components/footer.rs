use leptos::prelude::*;
use pipeguide_core::COPYRIGHT;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full text-center pt-9 text-xs">
            <p>{COPYRIGHT}</p>
        </footer>
    }
}

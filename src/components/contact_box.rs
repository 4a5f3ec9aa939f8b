use leptos::prelude::*;
use pipeguide_core::{
    contact_rows, ContactValue, LinkTarget, Links, Theme, CONTACT_HEADING, PENALTY_NOTICE,
};

use super::link_button::LinkButton;

/// How to report excavation work: phone, apps, web, and the control room.
#[component]
pub fn ContactBox(theme: Theme, links: Links) -> impl IntoView {
    let rows = contact_rows();

    view! {
        <section class="mb-8">
            <h2
                class="text-3xl font-bold text-center mb-3"
                style=format!("color: {}", theme.primary)
            >
                {CONTACT_HEADING}
            </h2>
            <div
                class="rounded p-4 text-2xl"
                style=format!(
                    "border: 1px solid {}; background-color: {}; color: {}",
                    theme.primary, theme.background, theme.text_primary,
                )
            >
                {rows.into_iter().map(|row| {
                    let value = match row.value {
                        ContactValue::Link { href, text, note } => view! {
                            <div class="inline-flex items-center flex-wrap">
                                <a href=href class="no-underline" style=format!("color: {}", theme.text_primary)>
                                    {text}
                                </a>
                                {note.map(|note| view! {
                                    <span class="text-[13px] ml-2" style=format!("color: {}", theme.primary)>
                                        {note}
                                    </span>
                                })}
                            </div>
                        }.into_any(),
                        ContactValue::AppStores => view! {
                            <div class="flex flex-wrap gap-2">
                                <LinkButton
                                    target=LinkTarget::AndroidStore
                                    links=links.clone()
                                    theme=theme.clone()
                                />
                                <LinkButton
                                    target=LinkTarget::IosStore
                                    links=links.clone()
                                    theme=theme.clone()
                                />
                            </div>
                        }.into_any(),
                    };
                    view! {
                        <div class="grid grid-cols-12 gap-4 items-center mb-2">
                            <div class="col-span-4 text-right whitespace-nowrap">{row.label}</div>
                            <div class="col-span-8">{value}</div>
                        </div>
                    }
                }).collect_view()}
                <div
                    class="mt-2 px-4 py-2 text-sm text-white"
                    style=format!("background-color: {}", theme.notice)
                >
                    {PENALTY_NOTICE}
                </div>
            </div>
        </section>
    }
}

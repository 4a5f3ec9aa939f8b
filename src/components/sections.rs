//! Bodies of the four accordion sections.

use leptos::prelude::*;
use pipeguide_core::{pipe_markers, rule_groups, FontScale, LinkTarget, Links, SectionId, Theme};

use super::link_button::LinkButton;
use super::text::{EmphasizedText, FontToggleButton, NumberedList, ScaledText};

/// Centered image, 100% wide on phones and 70% above the breakpoint.
#[component]
fn ResponsiveImage(#[prop(into)] src: Signal<String>, alt: &'static str) -> impl IntoView {
    view! { <img class="responsive-image" src=move || src.get() alt=alt /> }
}

#[component]
pub fn ProcedureSection(#[prop(into)] hero: Signal<String>, theme: Theme) -> impl IntoView {
    view! {
        <div class="p-4" style=format!("background-color: {}", theme.background)>
            <ResponsiveImage src=hero alt="logic" />
        </div>
    }
}

#[component]
pub fn DamagePreventionSection(font_scale: Signal<FontScale>, theme: Theme) -> impl IntoView {
    let groups = rule_groups();

    view! {
        <div class="p-4" style=format!("background-color: {}", theme.background)>
            {groups.into_iter().map(|group| {
                let heading_theme = theme.clone();
                let color = theme.text_secondary.clone();
                view! {
                    <NumberedList theme=theme.clone()>
                        <EmphasizedText theme=heading_theme>{group.heading}</EmphasizedText>
                        {group.rules.iter().map(|&rule| view! {
                            <li class="numbered-item">
                                <ScaledText text=rule font_scale=font_scale color=color.clone() />
                            </li>
                        }).collect_view()}
                    </NumberedList>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn PipeMarkersSection(font_scale: Signal<FontScale>, theme: Theme) -> impl IntoView {
    let markers = pipe_markers();

    view! {
        <div class="p-4" style=format!("background-color: {}", theme.background)>
            {markers.into_iter().map(|marker| view! {
                <div class="marker mb-6">
                    <EmphasizedText theme=theme.clone()>{marker.name}</EmphasizedText>
                    <ScaledText
                        text=marker.desc
                        font_scale=font_scale
                        color=theme.text_secondary.clone()
                    />
                    <ResponsiveImage src=marker.image.to_string() alt=marker.alt />
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn HomepageSection(links: Links, theme: Theme) -> impl IntoView {
    view! {
        <div class="p-2 flex justify-center" style=format!("background-color: {}", theme.background)>
            <LinkButton target=LinkTarget::CorporateHome links=links theme=theme.clone() />
        </div>
    }
}

/// Body of the accordion `id`, preceded by the font-size toggle in the
/// sections that carry one.
#[component]
pub fn SectionBody(
    id: SectionId,
    #[prop(into)] hero: Signal<String>,
    font_scale: Signal<FontScale>,
    on_toggle: Callback<()>,
    links: Links,
    theme: Theme,
) -> impl IntoView {
    let toggle = id
        .has_font_toggle()
        .then(|| view! { <FontToggleButton on_toggle=on_toggle theme=theme.clone() /> });

    let body = match id {
        SectionId::Procedure => view! { <ProcedureSection hero=hero theme=theme /> }.into_any(),
        SectionId::DamagePrevention => {
            view! { <DamagePreventionSection font_scale=font_scale theme=theme /> }.into_any()
        }
        SectionId::PipeMarkers => {
            view! { <PipeMarkersSection font_scale=font_scale theme=theme /> }.into_any()
        }
        SectionId::Homepage => view! { <HomepageSection links=links theme=theme /> }.into_any(),
    };

    view! {
        {toggle}
        {body}
    }
}

use leptos::ev;
use leptos::prelude::*;
use pipeguide_core::{FontScale, HeaderLabels, PageConfig, PageState, SectionId};

use crate::components::accordion::Accordion;
use crate::components::contact_box::ContactBox;
use crate::components::footer::Footer;
use crate::components::header::HeaderBanner;
use crate::components::sections::SectionBody;

/// The whole page. The only component that owns state: the header layout
/// (driven by window resizes) and the shared font scale.
#[component]
pub fn InfoPage(config: PageConfig) -> impl IntoView {
    let state = RwSignal::new(PageState::new(viewport_width(), &config));

    let handle = window_event_listener(ev::resize, move |_| {
        let width = viewport_width();
        state.maybe_update(|s| s.on_resize(width));
    });
    on_cleanup(move || handle.remove());

    let labels: Signal<HeaderLabels> = Memo::new(move |_| state.with(|s| s.header.labels)).into();
    let hero = Memo::new(move |_| state.with(|s| s.header.hero.path.clone()));
    let font_scale: Signal<FontScale> = Memo::new(move |_| state.with(|s| s.font_scale)).into();
    let toggle_font = Callback::new(move |_: ()| state.update(|s| s.toggle_font_scale()));

    let layout = Memo::new(move |_| state.with(|s| s.layout_class()));

    let PageConfig { theme, links, .. } = config;

    view! {
        <div
            class=move || format!("flex flex-col min-h-[90vh] {}", layout.get())
            style=format!("font-family: {}", theme.font_family)
        >
            <div class="w-full max-w-6xl mx-auto px-4 sm:px-6">
                <HeaderBanner labels=labels theme=theme.clone() />
                <main class="mt-8">
                    <ContactBox theme=theme.clone() links=links.clone() />

                    {SectionId::ALL.into_iter().map(|id| {
                        // Accordion bodies are re-created on every expand, so each keeps its own copy.
                        let body_theme = theme.clone();
                        let body_links = links.clone();
                        view! {
                            <Accordion id=id theme=theme.clone()>
                                <SectionBody
                                    id=id
                                    hero=hero
                                    font_scale=font_scale
                                    on_toggle=toggle_font
                                    links=body_links.clone()
                                    theme=body_theme.clone()
                                />
                            </Accordion>
                        }
                    }).collect_view()}
                </main>
            </div>
        </div>
        <Footer />
    }
}

/// `window.innerWidth`, or NaN when the host cannot report it.
fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::NAN)
}

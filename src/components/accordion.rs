use leptos::prelude::*;
use pipeguide_core::{Expansion, SectionId, Theme};

use super::icons::ExpandMore;

/// Expansion flag of a single accordion. Every [`Accordion`] creates its own,
/// so opening one section cannot touch another.
#[derive(Clone, Copy)]
pub struct AccordionState {
    expansion: RwSignal<Expansion>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self {
            expansion: RwSignal::new(Expansion::default()),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expansion.get().is_expanded()
    }

    pub fn toggle(&self) {
        self.expansion.update(|e| e.toggle());
    }
}

impl Default for AccordionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapsible region. Starts collapsed and knows nothing about its siblings.
#[component]
pub fn Accordion(id: SectionId, theme: Theme, children: ChildrenFn) -> impl IntoView {
    let state = AccordionState::new();
    let is_expanded = move || state.is_expanded();

    let summary_id = format!("{}-summary", id.anchor());
    let details_id = format!("{}-details", id.anchor());
    let region_id = details_id.clone();
    let region_label = summary_id.clone();

    view! {
        <section class="accordion">
            <button
                type="button"
                id=summary_id
                class="accordion-summary w-full flex items-center justify-between py-3 text-left"
                aria-expanded=move || is_expanded().to_string()
                aria-controls=details_id
                on:click=move |_| state.toggle()
            >
                <h2 class="text-xl font-medium" style=format!("color: {}", theme.primary)>
                    {id.title()}
                </h2>
                <span class=move || {
                    if is_expanded() {
                        "text-slate-500 rotate-180 transition-transform"
                    } else {
                        "text-slate-500 transition-transform"
                    }
                }>
                    <ExpandMore class="w-6 h-6" />
                </span>
            </button>
            <Show when=is_expanded>
                <div id=region_id.clone() role="region" aria-labelledby=region_label.clone()>
                    {children()}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_states() -> Vec<(SectionId, AccordionState)> {
        SectionId::ALL
            .into_iter()
            .map(|id| (id, AccordionState::new()))
            .collect()
    }

    #[test]
    fn test_all_sections_start_collapsed() {
        let owner = Owner::new();
        owner.with(|| {
            let states = section_states();
            assert_eq!(states.len(), 4);
            assert!(states.iter().all(|(_, s)| !s.is_expanded()));
        });
    }

    #[test]
    fn test_sections_expand_independently() {
        let owner = Owner::new();
        owner.with(|| {
            let states = section_states();
            let (_, rules) = states[1];
            rules.toggle();

            for (id, state) in &states {
                assert_eq!(
                    state.is_expanded(),
                    *id == SectionId::DamagePrevention,
                    "{id:?}"
                );
            }

            // no mutual exclusion
            let (_, markers) = states[2];
            markers.toggle();
            assert!(rules.is_expanded());
            assert!(markers.is_expanded());
            assert!(!states[0].1.is_expanded());
            assert!(!states[3].1.is_expanded());
        });
    }

    #[test]
    fn test_copies_share_one_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let state = AccordionState::new();
            let handle = state;
            handle.toggle();
            assert!(state.is_expanded());
            handle.toggle();
            assert!(!state.is_expanded());
        });
    }
}

//! Cohort Section Component
//!
//! Heading plus the card container for one cohort. The section element is
//! registered as the scroll target for its navigation link.

use dioxus::prelude::*;
use portal_core::{CardView, CohortFragment, CohortKey, PortalEvent};

use super::cards::{EmptyStateCard, OpportunityCard};
use crate::context::use_dispatcher;

#[component]
pub fn CohortSection(cohort: CohortKey, title: &'static str, subtitle: &'static str) -> Element {
    let dispatcher = use_dispatcher();
    let portal = dispatcher.portal();

    // Missing container: nothing rendered yet, show an empty grid
    let fragment = portal.read().fragment(&cohort).cloned();
    let anchor_key = cohort.clone();

    let on_apply = move |card: CardView| {
        dispatcher.dispatch(PortalEvent::ApplyRequested {
            id: card.id,
            form_url: card.form_url.to_string(),
        });
    };

    rsx! {
        section {
            id: "{cohort}",
            class: "section",
            onmounted: move |e| dispatcher.set_section(anchor_key.clone(), e.data()),

            div { class: "section-header",
                h2 { class: "section-title", "{title}" }
                p { class: "section-subtitle", "{subtitle}" }
            }

            div { id: cohort.container_id(), class: "cards-grid",
                {match fragment {
                    Some(CohortFragment::Cards(cards)) => rsx! {
                        for card in cards {
                            OpportunityCard { key: "{card.id}", card: card.clone(), on_apply }
                        }
                    },
                    Some(CohortFragment::Empty(state)) => rsx! {
                        EmptyStateCard { state }
                    },
                    None => rsx! {},
                }}
            }
        }
    }
}

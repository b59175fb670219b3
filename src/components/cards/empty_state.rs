//! Empty State Component

use dioxus::prelude::*;
use portal_core::EmptyState;

/// Placeholder for a cohort without listings
#[component]
pub fn EmptyStateCard(state: EmptyState) -> Element {
    rsx! {
        div { class: "empty-state",
            span { class: "empty-icon", "💼" }
            h3 { "{state.title}" }
            p { "{state.message}" }
        }
    }
}

//! Opportunity Card Component
//!
//! One listing: employer, employment tag, role, compensation, deadline,
//! live registration count and the Apply control.

use dioxus::prelude::*;
use portal_core::{CardView, EmploymentType};

/// CSS classes for the employment-type tag
fn type_class(employment: EmploymentType) -> &'static str {
    match employment {
        EmploymentType::FullTime => "opportunity-type",
        EmploymentType::Internship => "opportunity-type internship",
    }
}

/// CSS classes for the registration counter.
///
/// Consecutive pulses alternate between two identical animations so that a
/// new pulse restarts it instead of continuing the running one.
fn count_class(pulsing: bool, pulse: u64) -> &'static str {
    match (pulsing, pulse % 2) {
        (false, _) => "registered-count",
        (true, 1) => "registered-count pulse",
        (true, _) => "registered-count pulse pulse-again",
    }
}

/// Opportunity card
///
/// # Examples
///
/// ```rust
/// rsx! {
///     OpportunityCard {
///         card: view,
///         on_apply: move |card: CardView| dispatcher.dispatch(PortalEvent::ApplyRequested {
///             id: card.id,
///             form_url: card.form_url.to_string(),
///         }),
///     }
/// }
/// ```
#[component]
pub fn OpportunityCard(
    /// Rendered listing
    card: CardView,
    /// Called with the card when Apply is clicked
    on_apply: EventHandler<CardView>,
) -> Element {
    let count_id = card.id.count_element_id();
    let clicked = card.clone();

    rsx! {
        div { class: "opportunity-card", "data-card-id": "{card.id}",
            div { class: "card-header",
                h3 { class: "company-name", "{card.employer}" }
                span { class: type_class(card.employment), "{card.employment}" }
            }

            p { class: "job-description", "{card.quoted_role()}" }

            div { class: "card-details",
                div { class: "detail-row",
                    span { class: "detail-label", "CTC/Stipend" }
                    span { class: "detail-value ctc-value", "{card.compensation}" }
                }
                div { class: "detail-row",
                    span { class: "detail-label", "Application Deadline" }
                    span { class: "detail-value deadline-value", "{card.deadline}" }
                }
                div { class: "detail-row",
                    span { class: "detail-label", "Registered" }
                    span {
                        id: "{count_id}",
                        class: count_class(card.pulsing, card.pulse),
                        "{card.registered}"
                    }
                }
            }

            div { class: "card-actions",
                button {
                    r#type: "button",
                    class: "apply-btn",
                    onclick: move |_| on_apply.call(clicked.clone()),
                    "Apply Now"
                }
            }
        }
    }
}

//! Feedback Stack Component
//!
//! Transient confirmations in the top-right corner. Each toast slides in,
//! stays for its dwell time and slides out; the phases are driven by the
//! portal's feedback presenter.

use dioxus::prelude::*;

use crate::context::use_dispatcher;

#[component]
pub fn FeedbackStack() -> Element {
    let portal = use_dispatcher().portal();
    let toasts = portal.read().feedback().toasts().to_vec();

    rsx! {
        div { class: "feedback-stack", "aria-live": "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: toast.class(),
                    div { class: "feedback-content",
                        span { class: "feedback-icon", "{toast.icon()}" }
                        span { "{toast.message()}" }
                    }
                }
            }
        }
    }
}

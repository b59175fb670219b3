//! The portal page.
//!
//! Header, one section per cohort and the feedback stack, all inside a
//! single scrolling container whose scroll events drive section tracking.

use dioxus::prelude::*;
use portal_core::{CohortKey, PortalEvent};

use crate::components::{CohortSection, FeedbackStack, NavHeader};
use crate::context::use_dispatcher_provider;

/// History fragment for a route section, `None` when empty
fn route_fragment(section: &str) -> Option<String> {
    if section.is_empty() {
        None
    } else {
        Some(format!("#{}", section))
    }
}

#[component]
pub fn Home(section: String) -> Element {
    let dispatcher = use_dispatcher_provider();
    let portal = dispatcher.portal();
    let mut loaded = use_signal(|| false);

    // Fragment at startup, followed once the page is mounted
    let initial_fragment = use_hook(|| route_fragment(&section));

    // Later fragment changes come from history, unless we wrote them ourselves
    use_effect(use_reactive!(|section| {
        if !*loaded.peek() {
            return;
        }
        let ours = portal
            .peek()
            .navigation()
            .fragment()
            .is_some_and(|cohort| cohort.as_str() == section);
        if !ours {
            dispatcher.dispatch(PortalEvent::HistoryChanged {
                fragment: route_fragment(&section),
            });
        }
    }));

    let (theme, cohorts) = {
        let portal = portal.read();
        let cohorts: Vec<(CohortKey, &'static str, &'static str)> = portal
            .catalog()
            .cohorts()
            .iter()
            .map(|cohort| (cohort.key.clone(), cohort.title, cohort.subtitle))
            .collect();
        (portal.theme(), cohorts)
    };

    rsx! {
        div { class: "portal", "data-theme": theme.as_str(),
            main {
                class: "portal-scroll",
                onmounted: move |e| dispatcher.set_scroller(e.data()),
                onscroll: move |_| dispatcher.dispatch(PortalEvent::Scrolled),
                onresize: move |_| dispatcher.dispatch(PortalEvent::LayoutChanged),

                div {
                    class: "page-top",
                    onmounted: move |e| {
                        dispatcher.set_top(e.data());
                        if !loaded() {
                            loaded.set(true);
                            dispatcher.dispatch(PortalEvent::Loaded {
                                fragment: initial_fragment.clone(),
                            });
                        }
                    },
                }

                NavHeader {}

                section { class: "hero",
                    h1 { class: "hero-title", "Campus Placement Portal" }
                    p { class: "hero-tagline",
                        "Current job and internship openings from the Training & Placement Cell"
                    }
                }

                for (cohort, title, subtitle) in cohorts {
                    CohortSection { key: "{cohort}", cohort: cohort.clone(), title, subtitle }
                }

                footer { class: "portal-footer",
                    "Registration counts are kept on this device only."
                }
            }

            FeedbackStack {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_has_no_fragment() {
        assert_eq!(route_fragment(""), None);
        assert_eq!(route_fragment("btech-2027"), Some("#btech-2027".to_string()));
    }
}

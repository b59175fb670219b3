//! Navigation Header Component
//!
//! Sticky header with the portal title, one link per cohort section and
//! the theme toggle.

use dioxus::prelude::*;
use portal_core::{CohortKey, IconState, PortalEvent};

use crate::context::use_dispatcher;

/// CSS classes for a navigation link
fn link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Navigation Header component
///
/// - Left: "Placement Portal" title
/// - Center: cohort links, the one in view highlighted
/// - Right: sun/moon theme toggle
#[component]
pub fn NavHeader() -> Element {
    let dispatcher = use_dispatcher();
    let portal = dispatcher.portal();

    let (links, current, theme) = {
        let portal = portal.read();
        let links: Vec<(CohortKey, &'static str)> = portal
            .catalog()
            .cohorts()
            .iter()
            .map(|cohort| (cohort.key.clone(), cohort.nav_label))
            .collect();
        (links, portal.current_section().cloned(), portal.theme())
    };
    let icons = theme.icons();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    h1 { class: "app-title", "Placement Portal" }
                }

                nav { class: "nav-links",
                    for (key, label) in links {
                        button {
                            key: "{key}",
                            r#type: "button",
                            class: link_class(current.as_ref() == Some(&key)),
                            "data-section": "{key}",
                            onclick: {
                                let key = key.clone();
                                move |_| dispatcher.dispatch(PortalEvent::NavigationRequested(key.clone()))
                            },
                            "{label}"
                        }
                    }
                }

                button {
                    r#type: "button",
                    id: "themeToggle",
                    class: "theme-toggle",
                    title: "Toggle theme",
                    "aria-label": "Switch to {theme.toggled().label()}",
                    onclick: move |_| dispatcher.dispatch(PortalEvent::ThemeToggled),

                    ThemeIcon { id: "lightIcon", state: icons.light, SunSvg {} }
                    ThemeIcon { id: "darkIcon", state: icons.dark, MoonSvg {} }
                }
            }
        }
    }
}

#[component]
fn ThemeIcon(id: &'static str, state: IconState, children: Element) -> Element {
    rsx! {
        span { id, class: "theme-icon", style: state.style(), {children} }
    }
}

#[component]
fn SunSvg() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
        }
    }
}

#[component]
fn MoonSvg() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

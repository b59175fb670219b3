use dioxus::prelude::*;
use portal_core::{LocalStore, Portal};

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// The portal is a single page; the hash fragment names the cohort section
/// in view (`/#btech-2027`), empty when none was chosen.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/#:section")]
    Home { section: String },
}

/// Root application component.
///
/// Builds the portal from the local store handed over at launch, then
/// provides it to the page.
#[component]
pub fn App() -> Element {
    let store = use_context::<LocalStore>();
    let portal: Signal<Portal> = use_signal(move || Portal::open(store));
    use_context_provider(|| portal);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

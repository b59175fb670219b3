//! The application state object.
//!
//! [`Portal`] owns every component and is the only thing the UI shell talks
//! to. Each UI callback becomes a [`PortalEvent`]; [`Portal::handle`]
//! updates state and returns the [`Effect`]s the shell must carry out.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::effects::{DeferredAction, Effect};
use crate::feedback::{FeedbackKind, FeedbackPresenter, FeedbackTimings};
use crate::navigation::{NavigationConfig, NavigationSynchronizer, ScrollLayout, ViewportSnapshot};
use crate::registry::RegistrationStore;
use crate::render::{CardRenderer, CohortFragment};
use crate::storage::LocalStore;
use crate::surface::DisplaySurface;
use crate::theme::{ThemeController, ThemePreference};
use crate::types::{CohortKey, ListingId};

/// How long the counter pulses after an Apply click
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

/// Delay before following the history fragment found at load
pub const DEEP_LINK_DELAY: Duration = Duration::from_millis(300);

/// Everything that can happen to the portal
#[derive(Debug, Clone, PartialEq)]
pub enum PortalEvent {
    /// The window finished loading; `fragment` is the initial history fragment
    Loaded { fragment: Option<String> },
    /// A navigation menu entry was clicked
    NavigationRequested(CohortKey),
    /// Back/forward changed the history fragment
    HistoryChanged { fragment: Option<String> },
    /// The page scrolled
    Scrolled,
    /// The scrolling container was resized or its sections finished mounting
    LayoutChanged,
    /// Section rectangles relative to the viewport, measured after a scroll
    ViewportMeasured(ViewportSnapshot),
    /// Answer to [`Effect::MeasureScrollLayout`]
    ScrollLayoutMeasured(ScrollLayout),
    /// A card's Apply control was clicked
    ApplyRequested { id: ListingId, form_url: String },
    /// The theme toggle was clicked
    ThemeToggled,
    /// A scheduled action came due
    Deferred(DeferredAction),
}

pub struct Portal<R = StdRng> {
    catalog: Catalog,
    registrations: RegistrationStore<R>,
    theme: ThemeController,
    navigation: NavigationSynchronizer,
    surface: DisplaySurface,
    feedback: FeedbackPresenter,
}

impl Portal<StdRng> {
    /// Built-in catalog, default tunables, OS-seeded counters
    pub fn open(store: LocalStore) -> Self {
        Self::with_parts(
            Catalog::builtin(),
            store,
            StdRng::from_os_rng(),
            NavigationConfig::default(),
            FeedbackTimings::default(),
        )
    }
}

impl<R: Rng> Portal<R> {
    /// Assemble the portal in load order: theme, persisted counters, one
    /// container per cohort, then the first render.
    pub fn with_parts(
        catalog: Catalog,
        store: LocalStore,
        rng: R,
        navigation: NavigationConfig,
        timings: FeedbackTimings,
    ) -> Self {
        let theme = ThemeController::load(store.clone());

        let mut registrations = RegistrationStore::with_rng(store, rng);
        registrations.load_from_persistence();

        let mut surface = DisplaySurface::default();
        for cohort in catalog.cohorts() {
            surface.mount(cohort.key.container_id());
        }

        let navigation = NavigationSynchronizer::new(catalog.keys(), navigation);

        let mut portal = Self {
            catalog,
            registrations,
            theme,
            navigation,
            surface,
            feedback: FeedbackPresenter::new(timings),
        };
        portal.render_all();
        portal
    }

    /// Re-render every cohort into its container
    pub fn render_all(&mut self) {
        tracing::debug!(cohorts = self.catalog.cohorts().len(), "Loading opportunities");
        for key in self.catalog.keys() {
            self.render_cohort(&key);
        }
        tracing::info!(
            listings = self.catalog.listing_count(),
            "All opportunities loaded"
        );
    }

    /// Re-render one cohort. False if its container is missing.
    pub fn render_cohort(&mut self, key: &CohortKey) -> bool {
        CardRenderer::render_into(
            &mut self.surface,
            key,
            self.catalog.listings(key),
            &mut self.registrations,
        )
    }

    pub fn handle(&mut self, event: PortalEvent) -> Vec<Effect> {
        match event {
            PortalEvent::Loaded { fragment } => self.on_loaded(fragment),
            PortalEvent::NavigationRequested(cohort) => self.navigation.navigate_to(&cohort),
            PortalEvent::HistoryChanged { fragment } => match self.known_fragment(fragment) {
                Some(cohort) => self.navigation.follow_fragment(&cohort),
                None => Vec::new(),
            },
            PortalEvent::Scrolled => vec![self.navigation.on_scroll(), Effect::MeasureViewport],
            PortalEvent::LayoutChanged => vec![Effect::MeasureViewport],
            PortalEvent::ViewportMeasured(snapshot) => self.navigation.on_viewport(&snapshot),
            PortalEvent::ScrollLayoutMeasured(layout) => self.navigation.on_layout(&layout),
            PortalEvent::ApplyRequested { id, form_url } => self.apply(&id, form_url),
            PortalEvent::ThemeToggled => self.toggle_theme(),
            PortalEvent::Deferred(action) => self.on_deferred(action),
        }
    }

    fn on_loaded(&mut self, fragment: Option<String>) -> Vec<Effect> {
        let mut effects = vec![
            Effect::ApplyTheme(self.theme.preference()),
            Effect::ScrollToTop,
        ];
        if let Some(current) = self.navigation.current() {
            effects.push(Effect::HighlightNav(current.clone()));
        }
        // Initial visibility report, as an observer gives when it starts
        effects.push(Effect::MeasureViewport);
        if let Some(cohort) = self.known_fragment(fragment) {
            tracing::debug!(cohort = %cohort, "Following initial fragment");
            effects.push(Effect::schedule(
                DEEP_LINK_DELAY,
                DeferredAction::OpenFragment(cohort),
            ));
        }
        effects
    }

    /// Apply workflow: count, refresh the card, open the form, confirm
    fn apply(&mut self, id: &ListingId, form_url: String) -> Vec<Effect> {
        let count = self.registrations.increment(id);

        let mut effects = Vec::new();
        if let Some(pulse) = self.surface.set_count(id, count) {
            effects.push(Effect::schedule(
                PULSE_DURATION,
                DeferredAction::ClearPulse {
                    id: id.clone(),
                    pulse,
                },
            ));
        } else {
            tracing::debug!(id = %id, "Counter not on screen, skipping display update");
        }

        tracing::info!(id = %id, count, "Opening application form");
        effects.push(Effect::OpenExternal(form_url));
        effects.extend(self.feedback.show(FeedbackKind::ApplyConfirmed));
        effects
    }

    fn toggle_theme(&mut self) -> Vec<Effect> {
        let preference = self.theme.toggle();
        let mut effects = vec![Effect::ApplyTheme(preference)];
        effects.extend(self.feedback.show(FeedbackKind::ThemeChanged(preference)));
        effects
    }

    fn on_deferred(&mut self, action: DeferredAction) -> Vec<Effect> {
        match action {
            DeferredAction::ScrollSettled { generation } => {
                self.navigation.on_scroll_settled(generation)
            }
            DeferredAction::ClearPulse { id, pulse } => {
                self.surface.clear_pulse(&id, pulse);
                Vec::new()
            }
            DeferredAction::RevealToast(id) => {
                self.feedback.reveal(id);
                Vec::new()
            }
            DeferredAction::DismissToast(id) => self.feedback.dismiss(id),
            DeferredAction::RemoveToast(id) => {
                self.feedback.remove(id);
                Vec::new()
            }
            DeferredAction::OpenFragment(cohort) => self.navigation.follow_fragment(&cohort),
        }
    }

    fn known_fragment(&self, fragment: Option<String>) -> Option<CohortKey> {
        fragment
            .as_deref()
            .and_then(CohortKey::from_fragment)
            .filter(|cohort| self.catalog.contains(cohort))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rendered content of a cohort's card container
    pub fn fragment(&self, cohort: &CohortKey) -> Option<&CohortFragment> {
        self.surface.fragment(&cohort.container_id())
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn registrations(&self) -> &RegistrationStore<R> {
        &self.registrations
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.preference()
    }

    pub fn navigation(&self) -> &NavigationSynchronizer {
        &self.navigation
    }

    /// Section currently considered in view
    pub fn current_section(&self) -> Option<&CohortKey> {
        self.navigation.current()
    }

    pub fn feedback(&self) -> &FeedbackPresenter {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::THEME_KEY;

    fn test_portal(store: LocalStore) -> Portal {
        Portal::with_parts(
            Catalog::builtin(),
            store,
            StdRng::seed_from_u64(42),
            NavigationConfig::default(),
            FeedbackTimings::default(),
        )
    }

    #[test]
    fn test_every_cohort_rendered_on_open() {
        let portal = test_portal(LocalStore::in_memory().unwrap());
        for key in portal.catalog().keys() {
            assert_eq!(portal.fragment(&key).unwrap().cards().len(), 6);
        }
    }

    #[test]
    fn test_loaded_applies_saved_theme_and_scrolls_top() {
        let store = LocalStore::in_memory().unwrap();
        store.set_item(THEME_KEY, "dark").unwrap();
        let mut portal = test_portal(store);

        let effects = portal.handle(PortalEvent::Loaded { fragment: None });
        assert_eq!(effects[0], Effect::ApplyTheme(ThemePreference::Dark));
        assert_eq!(effects[1], Effect::ScrollToTop);
        assert!(effects.contains(&Effect::HighlightNav(CohortKey::from("btech-2026"))));
        assert!(effects.contains(&Effect::MeasureViewport));
    }

    #[test]
    fn test_scroll_and_layout_change_measure_viewport() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let effects = portal.handle(PortalEvent::Scrolled);
        assert!(matches!(effects[0], Effect::Schedule { .. }));
        assert_eq!(effects[1], Effect::MeasureViewport);

        assert_eq!(portal.handle(PortalEvent::LayoutChanged), vec![Effect::MeasureViewport]);
    }

    #[test]
    fn test_loaded_with_fragment_schedules_deep_link() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let effects = portal.handle(PortalEvent::Loaded {
            fragment: Some("#btech-dual-2028".to_string()),
        });
        assert!(effects.contains(&Effect::schedule(
            DEEP_LINK_DELAY,
            DeferredAction::OpenFragment(CohortKey::from("btech-dual-2028"))
        )));
    }

    #[test]
    fn test_loaded_with_unknown_fragment_is_ignored() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let effects = portal.handle(PortalEvent::Loaded {
            fragment: Some("#nowhere".to_string()),
        });
        assert!(!effects.iter().any(|e| matches!(e, Effect::Schedule { .. })));
    }

    #[test]
    fn test_history_change_navigates() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let effects = portal.handle(PortalEvent::HistoryChanged {
            fragment: Some("#btech-dual-2027".to_string()),
        });
        assert!(effects.contains(&Effect::ScrollToSection(CohortKey::from("btech-dual-2027"))));
        assert_eq!(
            portal.current_section(),
            Some(&CohortKey::from("btech-dual-2027"))
        );
        assert_eq!(
            portal.navigation().fragment(),
            Some(&CohortKey::from("btech-dual-2027"))
        );
    }

    #[test]
    fn test_history_change_to_unknown_or_empty_is_ignored() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        portal.handle(PortalEvent::NavigationRequested(CohortKey::from("btech-2027")));

        for fragment in [Some("#mba-2030".to_string()), Some("#".to_string()), None] {
            let effects = portal.handle(PortalEvent::HistoryChanged { fragment });
            assert!(effects.is_empty());
            assert_eq!(
                portal.current_section(),
                Some(&CohortKey::from("btech-2027"))
            );
        }
        assert_eq!(portal.navigation().fragment(), None);
    }

    #[test]
    fn test_theme_toggle_effects() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let effects = portal.handle(PortalEvent::ThemeToggled);
        assert_eq!(effects[0], Effect::ApplyTheme(ThemePreference::Dark));
        assert_eq!(portal.theme(), ThemePreference::Dark);
        assert_eq!(portal.feedback().toasts().len(), 1);
    }

    #[test]
    fn test_apply_pulses_then_clears() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let key = CohortKey::from("btech-2027");
        let id = ListingId::derive(&key, "Swiggy");

        let effects = portal.handle(PortalEvent::ApplyRequested {
            id: id.clone(),
            form_url: crate::catalog::APPLICATION_FORM.to_string(),
        });
        assert!(effects.contains(&Effect::schedule(
            PULSE_DURATION,
            DeferredAction::ClearPulse {
                id: id.clone(),
                pulse: 1
            }
        )));
        let card = |portal: &Portal| {
            portal.fragment(&key).unwrap().cards()[3].clone()
        };
        assert!(card(&portal).pulsing);

        portal.handle(PortalEvent::Deferred(DeferredAction::ClearPulse { id, pulse: 1 }));
        assert!(!card(&portal).pulsing);
    }

    #[test]
    fn test_second_apply_restarts_pulse() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let key = CohortKey::from("btech-2027");
        let id = ListingId::derive(&key, "Swiggy");
        let apply = PortalEvent::ApplyRequested {
            id: id.clone(),
            form_url: crate::catalog::APPLICATION_FORM.to_string(),
        };

        let clear_timers = |effects: Vec<Effect>| -> Vec<DeferredAction> {
            effects
                .into_iter()
                .filter_map(|e| match e {
                    Effect::Schedule {
                        action: action @ DeferredAction::ClearPulse { .. },
                        ..
                    } => Some(action),
                    _ => None,
                })
                .collect()
        };
        let first = clear_timers(portal.handle(apply.clone()));
        let second = clear_timers(portal.handle(apply));
        assert_eq!((first.len(), second.len()), (1, 1));

        let card = |portal: &Portal| portal.fragment(&key).unwrap().cards()[3].clone();
        let registered = card(&portal).registered;

        portal.handle(PortalEvent::Deferred(first[0].clone()));
        assert!(card(&portal).pulsing);
        assert_eq!(card(&portal).registered, registered);

        portal.handle(PortalEvent::Deferred(second[0].clone()));
        assert!(!card(&portal).pulsing);
    }

    #[test]
    fn test_apply_without_card_still_counts_and_opens() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        let id = ListingId::from_raw("retired-listing");

        let effects = portal.handle(PortalEvent::ApplyRequested {
            id: id.clone(),
            form_url: "https://example.com/form".to_string(),
        });
        assert!(effects.contains(&Effect::OpenExternal("https://example.com/form".to_string())));
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::Schedule { action: DeferredAction::ClearPulse { .. }, .. })));
        assert!(portal.registrations().peek(&id).is_some());
    }

    #[test]
    fn test_toast_life_cycle_through_events() {
        let mut portal = test_portal(LocalStore::in_memory().unwrap());
        portal.handle(PortalEvent::ThemeToggled);

        portal.handle(PortalEvent::Deferred(DeferredAction::RevealToast(0)));
        let effects = portal.handle(PortalEvent::Deferred(DeferredAction::DismissToast(0)));
        assert_eq!(effects.len(), 1);
        portal.handle(PortalEvent::Deferred(DeferredAction::RemoveToast(0)));
        assert!(portal.feedback().toasts().is_empty());
    }
}

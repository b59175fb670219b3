//! End-to-end scenarios driven through `Portal::handle`.
//!
//! No display surface is attached; effects are inspected directly.

use portal_core::catalog::APPLICATION_FORM;
use portal_core::storage::{REGISTRATION_COUNTS_KEY, THEME_KEY};
use portal_core::{
    Catalog, Cohort, CohortKey, DeferredAction, Effect, FeedbackTimings, ListingId, LocalStore,
    NavigationConfig, Portal, PortalEvent, ScrollLayout, SectionBounds, ThemePreference,
    ViewportSnapshot,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn portal_with(store: LocalStore, seed: u64) -> Portal {
    Portal::with_parts(
        Catalog::builtin(),
        store,
        StdRng::seed_from_u64(seed),
        NavigationConfig::default(),
        FeedbackTimings::default(),
    )
}

fn counts(portal: &Portal, cohort: &CohortKey) -> Vec<u32> {
    portal
        .fragment(cohort)
        .expect("cohort rendered")
        .cards()
        .iter()
        .map(|c| c.registered)
        .collect()
}

fn opened(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::OpenExternal(url) => Some(url.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn apply_on_google_touches_only_google() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 2026);
    let cohort = CohortKey::from("btech-2026");

    let fragment = portal.fragment(&cohort).unwrap();
    assert_eq!(fragment.cards().len(), 6);
    let before = counts(&portal, &cohort);

    let google = portal.fragment(&cohort).unwrap().cards()[0].clone();
    assert_eq!(google.employer, "Google");

    let effects = portal.handle(PortalEvent::ApplyRequested {
        id: google.id.clone(),
        form_url: google.form_url.to_string(),
    });

    let after = counts(&portal, &cohort);
    assert_eq!(after[0], before[0] + 1);
    assert_eq!(&after[1..], &before[1..]);

    assert_eq!(
        opened(&effects),
        vec!["https://docs.google.com/forms/d/e/1FAIpQLSfqAa75Wq9W2ts-3XigaqkD0aozMopXhTVYz6KTA4mIpv9buA/viewform?usp=dialog"]
    );
    assert_eq!(portal.feedback().toasts().len(), 1);
}

#[test]
fn menu_navigation_is_immediate() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 1);
    let target = CohortKey::from("btech-2027");

    let effects = portal.handle(PortalEvent::NavigationRequested(target.clone()));

    assert_eq!(portal.current_section(), Some(&target));
    assert!(effects.contains(&Effect::HighlightNav(target.clone())));
    assert!(effects.contains(&Effect::ScrollToSection(target)));
}

#[test]
fn counts_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let cohort = CohortKey::from("btech-dual-2027");
    let goldman = ListingId::derive(&cohort, "Goldman Sachs");

    let (expected, shown) = {
        let store = LocalStore::in_dir(temp_dir.path()).unwrap();
        let mut portal = portal_with(store, 10);
        portal.handle(PortalEvent::ApplyRequested {
            id: goldman.clone(),
            form_url: APPLICATION_FORM.to_string(),
        });
        let shown = counts(&portal, &cohort);
        (portal.registrations().peek(&goldman).unwrap(), shown)
    };

    let store = LocalStore::in_dir(temp_dir.path()).unwrap();
    let portal = portal_with(store, 999);
    assert_eq!(portal.registrations().peek(&goldman), Some(expected));
    // Every counter was persisted with the increment, so nothing re-seeds
    assert_eq!(counts(&portal, &cohort), shown);
}

#[test]
fn malformed_persisted_state_gives_defaults() {
    let store = LocalStore::in_memory().unwrap();
    store.set_item(THEME_KEY, "blue").unwrap();
    store.set_item(REGISTRATION_COUNTS_KEY, "][").unwrap();

    let mut portal = portal_with(store, 3);
    assert_eq!(portal.theme(), ThemePreference::Light);

    let effects = portal.handle(PortalEvent::Loaded { fragment: None });
    assert_eq!(effects[0], Effect::ApplyTheme(ThemePreference::Light));
    for cohort in portal.catalog().keys() {
        assert!(counts(&portal, &cohort).iter().all(|c| (5..=50).contains(c)));
    }
}

#[test]
fn theme_toggle_round_trip_is_persisted() {
    let store = LocalStore::in_memory().unwrap();
    let mut portal = portal_with(store.clone(), 3);

    portal.handle(PortalEvent::ThemeToggled);
    assert_eq!(portal.theme(), ThemePreference::Dark);
    assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));

    portal.handle(PortalEvent::ThemeToggled);
    assert_eq!(portal.theme(), ThemePreference::Light);
    assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));

    let messages: Vec<_> = portal
        .feedback()
        .toasts()
        .iter()
        .map(|t| t.message())
        .collect();
    assert_eq!(messages, vec!["Dark Mode activated", "Light Mode activated"]);
}

#[test]
fn empty_cohort_shows_only_empty_state() {
    let catalog = Catalog::new(vec![Cohort {
        key: CohortKey::from("mtech-2026"),
        title: "M.Tech 2026",
        subtitle: "Nothing yet",
        nav_label: "M.Tech",
        listings: Vec::new(),
    }]);
    let portal = Portal::with_parts(
        catalog,
        LocalStore::in_memory().unwrap(),
        StdRng::seed_from_u64(0),
        NavigationConfig::default(),
        FeedbackTimings::default(),
    );

    let fragment = portal.fragment(&CohortKey::from("mtech-2026")).unwrap();
    assert!(fragment.is_empty_state());
    assert!(fragment.cards().is_empty());
}

#[test]
fn scroll_burst_measures_once() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 4);

    let mut schedules = Vec::new();
    for _ in 0..5 {
        schedules.extend(portal.handle(PortalEvent::Scrolled));
    }

    let mut measurements = 0;
    for effect in schedules {
        let Effect::Schedule { action, .. } = effect else {
            assert_eq!(effect, Effect::MeasureViewport);
            continue;
        };
        let follow_up = portal.handle(PortalEvent::Deferred(action));
        measurements += follow_up
            .iter()
            .filter(|e| matches!(e, Effect::MeasureScrollLayout))
            .count();
    }
    assert_eq!(measurements, 1);

    let layout = ScrollLayout {
        scroll_y: 2000.0,
        sections: portal
            .catalog()
            .keys()
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key, SectionBounds::new(i as f64 * 1000.0, 1000.0)))
            .collect(),
    };
    portal.handle(PortalEvent::ScrollLayoutMeasured(layout));
    assert_eq!(
        portal.current_section(),
        Some(&CohortKey::from("btech-2027"))
    );
}

#[test]
fn visibility_updates_fragment_without_scrolling() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 4);
    let snapshot = ViewportSnapshot {
        viewport_height: 900.0,
        sections: vec![
            (CohortKey::from("btech-2026"), SectionBounds::new(-700.0, 800.0)),
            (CohortKey::from("btech-dual-2027"), SectionBounds::new(100.0, 800.0)),
        ],
    };

    let effects = portal.handle(PortalEvent::ViewportMeasured(snapshot));
    let target = CohortKey::from("btech-dual-2027");
    assert!(effects.contains(&Effect::ReplaceFragment(target.clone())));
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::ScrollToSection(_) | Effect::ScrollToTop)));
    assert_eq!(portal.current_section(), Some(&target));
}

#[test]
fn deep_link_follows_after_delay() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 4);
    let effects = portal.handle(PortalEvent::Loaded {
        fragment: Some("#btech-dual-2028".to_string()),
    });

    let action = effects
        .into_iter()
        .find_map(|e| match e {
            Effect::Schedule {
                action: action @ DeferredAction::OpenFragment(_),
                ..
            } => Some(action),
            _ => None,
        })
        .expect("deep link scheduled");

    let effects = portal.handle(PortalEvent::Deferred(action));
    let target = CohortKey::from("btech-dual-2028");
    assert!(effects.contains(&Effect::ScrollToSection(target.clone())));
    assert_eq!(portal.current_section(), Some(&target));
}

#[test]
fn startup_measurement_sets_fragment_without_scroll() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 4);
    let effects = portal.handle(PortalEvent::Loaded { fragment: None });
    assert!(effects.contains(&Effect::MeasureViewport));
    assert_eq!(portal.navigation().fragment(), None);

    // Page at the top: the first section fills most of the viewport
    let snapshot = ViewportSnapshot {
        viewport_height: 900.0,
        sections: vec![
            (CohortKey::from("btech-2026"), SectionBounds::new(150.0, 1200.0)),
            (CohortKey::from("btech-dual-2027"), SectionBounds::new(1350.0, 1200.0)),
        ],
    };
    let effects = portal.handle(PortalEvent::ViewportMeasured(snapshot));
    let first = CohortKey::from("btech-2026");
    assert!(effects.contains(&Effect::ReplaceFragment(first.clone())));
    assert_eq!(portal.navigation().fragment(), Some(&first));
}

#[test]
fn unknown_history_fragment_keeps_current_section() {
    let mut portal = portal_with(LocalStore::in_memory().unwrap(), 4);
    let current = portal.current_section().cloned();

    for fragment in [Some("#mba-2030".to_string()), None] {
        assert!(portal
            .handle(PortalEvent::HistoryChanged { fragment })
            .is_empty());
        assert_eq!(portal.current_section().cloned(), current);
    }
}

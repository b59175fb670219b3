//! In-memory model of the display surface.
//!
//! Holds the content of every card container that currently exists. The UI
//! shell renders straight from it, so an update that finds no target here
//! has nothing to show and is dropped.

use std::collections::BTreeMap;

use crate::render::CohortFragment;
use crate::types::ListingId;

#[derive(Debug, Clone, Default)]
pub struct DisplaySurface {
    /// Container id -> content (`None` until first render)
    containers: BTreeMap<String, Option<CohortFragment>>,
}

impl DisplaySurface {
    /// Register a container so it can receive content
    pub fn mount(&mut self, container: impl Into<String>) {
        self.containers.entry(container.into()).or_insert(None);
    }

    pub fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    /// Swap a container's content for `fragment` in one step.
    ///
    /// Returns false if the container does not exist.
    pub fn replace(&mut self, container: &str, fragment: CohortFragment) -> bool {
        match self.containers.get_mut(container) {
            Some(slot) => {
                *slot = Some(fragment);
                true
            }
            None => false,
        }
    }

    pub fn fragment(&self, container: &str) -> Option<&CohortFragment> {
        self.containers.get(container).and_then(|f| f.as_ref())
    }

    /// Show a new count on a card and (re)start its pulse.
    ///
    /// Returns the pulse generation to hand back to
    /// [`clear_pulse`](Self::clear_pulse), or `None` if no card with that id
    /// is on the surface.
    pub fn set_count(&mut self, id: &ListingId, count: u32) -> Option<u64> {
        let card = self.card_mut(id)?;
        card.registered = count;
        card.pulsing = true;
        card.pulse += 1;
        Some(card.pulse)
    }

    /// End the pulse started as generation `pulse`. A newer pulse keeps
    /// running.
    pub fn clear_pulse(&mut self, id: &ListingId, pulse: u64) {
        if let Some(card) = self.card_mut(id) {
            if card.pulse == pulse {
                card.pulsing = false;
            }
        }
    }

    fn card_mut(&mut self, id: &ListingId) -> Option<&mut crate::render::CardView> {
        self.containers
            .values_mut()
            .filter_map(|f| match f {
                Some(CohortFragment::Cards(cards)) => Some(cards),
                _ => None,
            })
            .flat_map(|cards| cards.iter_mut())
            .find(|card| &card.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CardView, EmptyState};
    use crate::types::{CohortKey, EmploymentType, Listing};

    fn card(employer: &'static str, registered: u32) -> CardView {
        let listing = Listing {
            employer,
            role: "Engineer",
            compensation: "₹1 LPA",
            deadline: "01 Jan 2025",
            form_url: "https://example.com",
            employment: EmploymentType::Internship,
        };
        let id = listing.id_in(&CohortKey::from("test"));
        CardView::from_listing(&listing, id, registered)
    }

    #[test]
    fn test_replace_requires_container() {
        let mut surface = DisplaySurface::default();
        assert!(!surface.replace("x-cards", CohortFragment::Empty(EmptyState::default())));

        surface.mount("x-cards");
        assert!(surface.fragment("x-cards").is_none());
        assert!(surface.replace("x-cards", CohortFragment::Empty(EmptyState::default())));
        assert!(surface.fragment("x-cards").unwrap().is_empty_state());
    }

    #[test]
    fn test_replace_discards_old_content() {
        let mut surface = DisplaySurface::default();
        surface.mount("x-cards");
        surface.replace("x-cards", CohortFragment::Cards(vec![card("A", 1), card("B", 2)]));
        surface.replace("x-cards", CohortFragment::Cards(vec![card("C", 3)]));

        let cards = surface.fragment("x-cards").unwrap().cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].employer, "C");
    }

    #[test]
    fn test_set_count_pulses_only_target() {
        let mut surface = DisplaySurface::default();
        surface.mount("x-cards");
        surface.replace("x-cards", CohortFragment::Cards(vec![card("A", 1), card("B", 2)]));

        let id = ListingId::from_raw("test-a");
        let pulse = surface.set_count(&id, 9).unwrap();

        let cards = surface.fragment("x-cards").unwrap().cards();
        assert_eq!((cards[0].registered, cards[0].pulsing), (9, true));
        assert_eq!((cards[1].registered, cards[1].pulsing), (2, false));

        surface.clear_pulse(&id, pulse);
        assert!(!surface.fragment("x-cards").unwrap().cards()[0].pulsing);
    }

    #[test]
    fn test_new_pulse_outlives_earlier_timer() {
        let mut surface = DisplaySurface::default();
        surface.mount("x-cards");
        surface.replace("x-cards", CohortFragment::Cards(vec![card("A", 1)]));

        let id = ListingId::from_raw("test-a");
        let first = surface.set_count(&id, 2).unwrap();
        let second = surface.set_count(&id, 3).unwrap();
        assert!(second > first);

        surface.clear_pulse(&id, first);
        let card = &surface.fragment("x-cards").unwrap().cards()[0];
        assert_eq!((card.registered, card.pulsing), (3, true));

        surface.clear_pulse(&id, second);
        assert!(!surface.fragment("x-cards").unwrap().cards()[0].pulsing);
    }

    #[test]
    fn test_set_count_without_card_is_skipped() {
        let mut surface = DisplaySurface::default();
        assert_eq!(surface.set_count(&ListingId::from_raw("nowhere"), 3), None);
        surface.clear_pulse(&ListingId::from_raw("nowhere"), 1);
    }
}

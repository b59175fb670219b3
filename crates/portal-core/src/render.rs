//! Card renderer.
//!
//! Turns a cohort's listings into display fragments. A fragment is plain
//! data; the UI shell decides how it looks.

use rand::Rng;

use crate::registry::RegistrationStore;
use crate::surface::DisplaySurface;
use crate::types::{CohortKey, EmploymentType, Listing, ListingId};

/// Everything a single opportunity card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ListingId,
    pub employer: &'static str,
    pub employment: EmploymentType,
    pub role: &'static str,
    pub compensation: &'static str,
    pub deadline: &'static str,
    /// Target of the card's Apply control
    pub form_url: &'static str,
    pub registered: u32,
    /// Counter pulse in progress
    pub pulsing: bool,
    /// Bumped each time a pulse starts; 0 until the first one
    pub pulse: u64,
}

impl CardView {
    pub fn from_listing(listing: &Listing, id: ListingId, registered: u32) -> Self {
        Self {
            id,
            employer: listing.employer,
            employment: listing.employment,
            role: listing.role,
            compensation: listing.compensation,
            deadline: listing.deadline,
            form_url: listing.form_url,
            registered,
            pulsing: false,
            pulse: 0,
        }
    }

    /// The role as printed on the card
    pub fn quoted_role(&self) -> String {
        format!("\"{}\"", self.role)
    }
}

/// Placeholder shown instead of cards when a cohort has no listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No Opportunities Available",
            message: "Currently, there are no opportunities available for this category. \
                      Please check back later or contact the Training & Placement Cell for updates.",
        }
    }
}

/// Content of one card container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CohortFragment {
    Empty(EmptyState),
    Cards(Vec<CardView>),
}

impl CohortFragment {
    pub fn cards(&self) -> &[CardView] {
        match self {
            CohortFragment::Cards(cards) => cards,
            CohortFragment::Empty(_) => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, CohortFragment::Empty(_))
    }
}

pub struct CardRenderer;

impl CardRenderer {
    /// Build the fragment for a cohort.
    ///
    /// Counts come from the registration store at call time, seeding any
    /// counter that has not been shown before.
    pub fn render<R: Rng>(
        cohort: &CohortKey,
        listings: &[Listing],
        registrations: &mut RegistrationStore<R>,
    ) -> CohortFragment {
        if listings.is_empty() {
            tracing::debug!(cohort = %cohort, "No opportunities, showing empty state");
            return CohortFragment::Empty(EmptyState::default());
        }

        let cards = listings
            .iter()
            .map(|listing| {
                let id = listing.id_in(cohort);
                let registered = registrations.get(&id);
                CardView::from_listing(listing, id, registered)
            })
            .collect();

        CohortFragment::Cards(cards)
    }

    /// Render a cohort and swap it into its container.
    ///
    /// Returns false, without rendering, if the container is not on the
    /// surface.
    pub fn render_into<R: Rng>(
        surface: &mut DisplaySurface,
        cohort: &CohortKey,
        listings: &[Listing],
        registrations: &mut RegistrationStore<R>,
    ) -> bool {
        let container = cohort.container_id();
        if !surface.has_container(&container) {
            tracing::debug!(container = %container, "Container not found, skipping render");
            return false;
        }

        let fragment = Self::render(cohort, listings, registrations);
        tracing::debug!(cohort = %cohort, cards = fragment.cards().len(), "Rendered cards");
        surface.replace(&container, fragment)
    }
}

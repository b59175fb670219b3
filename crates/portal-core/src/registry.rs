//! Registration counters.
//!
//! One counter per listing, seeded lazily with a random demo value and bumped
//! by one per Apply click. The whole map is written back to the local store
//! after every increment.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PortalResult;
use crate::storage::{LocalStore, REGISTRATION_COUNTS_KEY};
use crate::types::ListingId;

/// Range of the first value a counter is given
pub const SEED_RANGE: RangeInclusive<u32> = 5..=50;

/// Registration counters backed by the local store
pub struct RegistrationStore<R = StdRng> {
    counts: BTreeMap<ListingId, u32>,
    store: LocalStore,
    rng: R,
}

impl RegistrationStore<StdRng> {
    /// Create an empty store seeded from the OS random source.
    ///
    /// Call [`load_from_persistence`](Self::load_from_persistence) before the
    /// first render so that counts survive reloads.
    pub fn new(store: LocalStore) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }
}

impl<R: Rng> RegistrationStore<R> {
    pub fn with_rng(store: LocalStore, rng: R) -> Self {
        Self {
            counts: BTreeMap::new(),
            store,
            rng,
        }
    }

    /// Current counter for `id`, seeding it on first access.
    ///
    /// Seeding only touches memory; the seed reaches the local store with
    /// the next increment.
    pub fn get(&mut self, id: &ListingId) -> u32 {
        if let Some(count) = self.counts.get(id) {
            return *count;
        }
        let seed = self.rng.random_range(SEED_RANGE);
        tracing::trace!(id = %id, seed, "Seeded registration counter");
        self.counts.insert(id.clone(), seed);
        seed
    }

    /// Bump the counter for `id` by one and persist the whole map.
    ///
    /// A failed write is logged and otherwise ignored; the in-memory value
    /// is still updated.
    pub fn increment(&mut self, id: &ListingId) -> u32 {
        let next = self.get(id).saturating_add(1);
        self.counts.insert(id.clone(), next);

        if let Err(e) = self.persist() {
            tracing::warn!(id = %id, error = %e, "Failed to persist registration counts");
        }

        tracing::debug!(id = %id, count = next, "Registration counted");
        next
    }

    /// Replace the in-memory counters with the persisted ones.
    ///
    /// Leaves the current state untouched when nothing was persisted or the
    /// persisted value is not a JSON object of non-negative integers.
    pub fn load_from_persistence(&mut self) {
        let raw = match self.store.get_item(REGISTRATION_COUNTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read registration counts");
                return;
            }
        };

        match serde_json::from_str::<BTreeMap<ListingId, u32>>(&raw) {
            Ok(counts) => {
                tracing::debug!(entries = counts.len(), "Loaded registration counts");
                self.counts = counts;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed registration counts");
            }
        }
    }

    /// Counter for `id` without seeding it
    pub fn peek(&self, id: &ListingId) -> Option<u32> {
        self.counts.get(id).copied()
    }

    pub fn counts(&self) -> &BTreeMap<ListingId, u32> {
        &self.counts
    }

    fn persist(&self) -> PortalResult<()> {
        let json = serde_json::to_string(&self.counts)?;
        self.store.set_item(REGISTRATION_COUNTS_KEY, &json)
    }
}

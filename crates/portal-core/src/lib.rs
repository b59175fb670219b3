//! Campus Placement Portal Core Library
//!
//! Everything the portal does, without a display surface attached.
//!
//! ## Overview
//!
//! The portal lists job and internship openings grouped by student cohort.
//! Clicking "Apply" opens the listing's external form and bumps a
//! client-local registration counter. Theme preference and the counters are
//! kept in a small key/value store that plays the role of browser local
//! storage.
//!
//! The UI shell feeds [`PortalEvent`]s into [`Portal::handle`] and executes
//! the [`Effect`]s that come back. The core never sleeps and never touches a
//! window: timed behavior is expressed as [`Effect::Schedule`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use portal_core::{CohortKey, LocalStore, Portal, PortalEvent};
//!
//! let store = LocalStore::new("~/.placement-portal/local-storage.redb")?;
//! let mut portal = Portal::open(store);
//!
//! for effect in portal.handle(PortalEvent::Loaded { fragment: None }) {
//!     println!("{:?}", effect);
//! }
//!
//! portal.handle(PortalEvent::NavigationRequested(CohortKey::from("btech-2027")));
//! ```

pub mod catalog;
pub mod effects;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod navigation;
pub mod portal;
pub mod registry;
pub mod render;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod timer;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use effects::{DeferredAction, Effect};
pub use error::{PortalError, PortalResult};
pub use feedback::{FeedbackKind, FeedbackPresenter, FeedbackTimings, Toast, ToastPhase};
pub use navigation::{
    NavigationConfig, NavigationSynchronizer, ScrollLayout, SectionBounds, SectionVisibility,
    ViewportSnapshot,
};
pub use portal::{Portal, PortalEvent};
pub use registry::RegistrationStore;
pub use render::{CardRenderer, CardView, CohortFragment, EmptyState};
pub use storage::LocalStore;
pub use surface::DisplaySurface;
pub use theme::{IconState, ThemeController, ThemeIcons, ThemePreference};
pub use types::*;

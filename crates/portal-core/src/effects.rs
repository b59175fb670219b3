//! Side effects requested by the core.
//!
//! Handlers never touch the display surface, the clock or the host
//! environment directly. They return a list of [`Effect`]s and the UI shell
//! carries them out, feeding deferred actions back in as events.

use std::time::Duration;

use crate::theme::ThemePreference;
use crate::types::{CohortKey, ListingId};

/// Something the UI shell must do on the core's behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the root element's `data-theme` attribute and icon states
    ApplyTheme(ThemePreference),
    /// Mark this cohort's navigation entry as active
    HighlightNav(CohortKey),
    /// Replace the history fragment without adding an entry or scrolling
    ReplaceFragment(CohortKey),
    /// Smooth-scroll the cohort's section to the top of the viewport
    ScrollToSection(CohortKey),
    /// Jump to the top of the page
    ScrollToTop,
    /// Open an address in an isolated browsing context (no opener, no referrer)
    OpenExternal(String),
    /// Measure section rectangles against the viewport, then send
    /// [`PortalEvent::ViewportMeasured`](crate::PortalEvent::ViewportMeasured)
    MeasureViewport,
    /// Measure scroll offset and section offsets, then send
    /// [`PortalEvent::ScrollLayoutMeasured`](crate::PortalEvent::ScrollLayoutMeasured)
    MeasureScrollLayout,
    /// Fire `action` back into the portal after `delay`
    Schedule {
        delay: Duration,
        action: DeferredAction,
    },
}

/// Work the core asked to be done later
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Scroll debounce expired; only the latest generation counts
    ScrollSettled { generation: u64 },
    /// Stop the counter pulse on a card, unless a newer pulse started
    ClearPulse { id: ListingId, pulse: u64 },
    /// Slide a feedback message in
    RevealToast(u64),
    /// Start sliding a feedback message out
    DismissToast(u64),
    /// Drop a feedback message once it is off-screen
    RemoveToast(u64),
    /// Deep link from the initial history fragment
    OpenFragment(CohortKey),
}

impl Effect {
    pub fn schedule(delay: Duration, action: DeferredAction) -> Self {
        Effect::Schedule { delay, action }
    }
}

//! Portal context for the desktop shell.
//!
//! The [`Portal`] lives in a signal provided by `App`. Components render
//! straight from it and send everything that happens through a
//! [`Dispatcher`], which feeds the event to [`Portal::handle`] and carries
//! out the returned [`Effect`]s against the window.
//!
//! ## Usage
//!
//! ```ignore
//! // In the page component
//! let dispatcher = use_dispatcher_provider();
//!
//! // In child components
//! let dispatcher = use_dispatcher();
//! dispatcher.dispatch(PortalEvent::ThemeToggled);
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use portal_core::{
    CohortKey, DeferredAction, Effect, Portal, PortalError, PortalEvent, ScrollLayout,
    SectionBounds, ViewportSnapshot,
};

use crate::app::Route;

/// Hook to access the portal from context.
pub fn use_portal() -> Signal<Portal> {
    use_context::<Signal<Portal>>()
}

/// Mounted elements the effects act on
#[derive(Default)]
pub struct Anchors {
    /// Top of the page, target of [`Effect::ScrollToTop`]
    pub top: Option<Rc<MountedData>>,
    /// The scrolling container
    pub scroller: Option<Rc<MountedData>>,
    /// One per cohort section
    pub sections: HashMap<CohortKey, Rc<MountedData>>,
}

/// Sends events into the portal and executes what comes back
#[derive(Clone, Copy)]
pub struct Dispatcher {
    portal: Signal<Portal>,
    anchors: Signal<Anchors>,
    /// Pending scroll-debounce timer, replaced on every scroll
    settle_task: Signal<Option<Task>>,
    navigator: Navigator,
}

/// Create the dispatcher and provide it to child components.
///
/// Must be called below the router.
pub fn use_dispatcher_provider() -> Dispatcher {
    let portal = use_portal();
    let anchors = use_signal(Anchors::default);
    let settle_task = use_signal(|| None);
    let navigator = navigator();
    use_context_provider(|| Dispatcher {
        portal,
        anchors,
        settle_task,
        navigator,
    })
}

/// Hook to access the dispatcher from context.
pub fn use_dispatcher() -> Dispatcher {
    use_context::<Dispatcher>()
}

impl Dispatcher {
    pub fn portal(&self) -> Signal<Portal> {
        self.portal
    }

    pub fn set_top(mut self, element: Rc<MountedData>) {
        self.anchors.write().top = Some(element);
    }

    pub fn set_scroller(mut self, element: Rc<MountedData>) {
        self.anchors.write().scroller = Some(element);
    }

    /// Register a section; once every section is in, visibility is measured
    pub fn set_section(mut self, cohort: CohortKey, element: Rc<MountedData>) {
        let mounted = {
            let mut anchors = self.anchors.write();
            anchors.sections.insert(cohort, element);
            anchors.sections.len()
        };
        if mounted == self.portal.peek().navigation().sections().len() {
            self.dispatch(PortalEvent::LayoutChanged);
        }
    }

    pub fn dispatch(mut self, event: PortalEvent) {
        tracing::trace!(?event, "Dispatching");
        let effects = self.portal.write().handle(event);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(mut self, effect: Effect) {
        match effect {
            // Both are read back from the portal when rendering
            Effect::ApplyTheme(theme) => tracing::debug!(%theme, "Theme applied"),
            Effect::HighlightNav(cohort) => tracing::trace!(%cohort, "Nav highlight"),

            Effect::ReplaceFragment(cohort) => {
                let target = Route::Home {
                    section: cohort.as_str().to_string(),
                };
                if let Some(failure) = self.navigator.replace(target) {
                    tracing::debug!(?failure, "Fragment update rejected");
                }
            }
            Effect::ScrollToSection(cohort) => {
                let target = self.anchors.peek().sections.get(&cohort).cloned();
                match target {
                    Some(element) => scroll_into_view(element, ScrollBehavior::Smooth),
                    None => tracing::debug!(%cohort, "Section not mounted, skipping scroll"),
                }
            }
            Effect::ScrollToTop => {
                if let Some(element) = self.anchors.peek().top.clone() {
                    scroll_into_view(element, ScrollBehavior::Instant);
                }
            }
            Effect::OpenExternal(url) => {
                // The system browser gives the form its own context with no
                // link back to this window
                if let Err(e) = open::that_detached(&url) {
                    let error = PortalError::OpenBlocked {
                        url,
                        reason: e.to_string(),
                    };
                    tracing::warn!(%error, "Could not open application form");
                }
            }
            Effect::MeasureViewport => {
                spawn(async move {
                    if let Some(snapshot) = self.measure_viewport().await {
                        self.dispatch(PortalEvent::ViewportMeasured(snapshot));
                    }
                });
            }
            Effect::MeasureScrollLayout => {
                spawn(async move {
                    if let Some(layout) = self.measure_layout().await {
                        self.dispatch(PortalEvent::ScrollLayoutMeasured(layout));
                    }
                });
            }
            Effect::Schedule { delay, action } => {
                let settles = matches!(action, DeferredAction::ScrollSettled { .. });
                let task = spawn(async move {
                    tokio::time::sleep(delay).await;
                    self.dispatch(PortalEvent::Deferred(action));
                });
                if settles {
                    // Superseded debounce timer
                    if let Some(previous) = self.settle_task.write().replace(task) {
                        previous.cancel();
                    }
                }
            }
        }
    }

    /// Section rectangles relative to the top of the scrolling container
    async fn section_rects(&self) -> Option<(f64, f64, Vec<(CohortKey, SectionBounds)>)> {
        let (scroller, sections) = {
            let anchors = self.anchors.peek();
            let scroller = anchors.scroller.clone()?;
            let sections: Vec<_> = self
                .portal
                .peek()
                .navigation()
                .sections()
                .iter()
                .filter_map(|key| anchors.sections.get(key).map(|el| (key.clone(), el.clone())))
                .collect();
            (scroller, sections)
        };

        let frame = match scroller.get_client_rect().await {
            Ok(rect) => rect,
            Err(e) => {
                tracing::debug!(error = ?e, "Could not measure scroll container");
                return None;
            }
        };

        let mut bounds = Vec::with_capacity(sections.len());
        for (key, element) in sections {
            match element.get_client_rect().await {
                Ok(rect) => bounds.push((
                    key,
                    SectionBounds::new(rect.origin.y - frame.origin.y, rect.size.height),
                )),
                Err(e) => tracing::debug!(cohort = %key, error = ?e, "Could not measure section"),
            }
        }

        Some((frame.size.height, scroll_offset(&scroller).await, bounds))
    }

    async fn measure_viewport(&self) -> Option<ViewportSnapshot> {
        let (viewport_height, _, sections) = self.section_rects().await?;
        Some(ViewportSnapshot {
            viewport_height,
            sections,
        })
    }

    async fn measure_layout(&self) -> Option<ScrollLayout> {
        let (_, scroll_y, sections) = self.section_rects().await?;
        // Viewport-relative tops become document offsets
        let sections = sections
            .into_iter()
            .map(|(key, b)| (key, SectionBounds::new(b.top + scroll_y, b.height)))
            .collect();
        Some(ScrollLayout { scroll_y, sections })
    }
}

async fn scroll_offset(scroller: &MountedData) -> f64 {
    match scroller.get_scroll_offset().await {
        Ok(offset) => offset.y,
        Err(e) => {
            tracing::debug!(error = ?e, "Could not read scroll offset");
            0.0
        }
    }
}

fn scroll_into_view(element: Rc<MountedData>, behavior: ScrollBehavior) {
    spawn(async move {
        if let Err(e) = element.scroll_to(behavior).await {
            tracing::debug!(error = ?e, "Scroll request failed");
        }
    });
}

//! Navigation synchronizer.
//!
//! Keeps the highlighted menu entry and the history fragment in line with
//! the section the reader is looking at. Two detectors feed the same state:
//!
//! - **Visibility ratio**: works like an intersection observer. Each scroll
//!   produces a [`ViewportSnapshot`]; sections whose visible ratio crossed a
//!   threshold are reported, and the most visible one wins.
//! - **Scroll offset** (fallback): debounced. Once scrolling has been idle
//!   for the debounce window, the scroll offset plus a sticky-header
//!   allowance is matched against each section's range.
//!
//! Explicit navigation from the menu wins immediately. Whichever of the
//! three happened last decides the current section.

use std::collections::HashMap;
use std::time::Duration;

use crate::effects::Effect;
use crate::timer::Debounce;
use crate::types::CohortKey;

/// Tunables for section detection
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Added to the scroll offset to account for the sticky header
    pub header_allowance: f64,
    /// Inset applied to the top and bottom of the viewport for ratios
    pub root_margin: f64,
    /// Ratio thresholds that trigger a visibility report
    pub thresholds: Vec<f64>,
    /// Idle time after the last scroll before the fallback runs
    pub debounce: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_allowance: 150.0,
            root_margin: 80.0,
            thresholds: vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9],
            debounce: Duration::from_millis(50),
        }
    }
}

/// Vertical extent of a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Section rectangles relative to the viewport, taken after a scroll
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewportSnapshot {
    pub viewport_height: f64,
    pub sections: Vec<(CohortKey, SectionBounds)>,
}

/// Scroll offset and section offsets relative to the document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollLayout {
    pub scroll_y: f64,
    pub sections: Vec<(CohortKey, SectionBounds)>,
}

/// One visibility report
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    pub cohort: CohortKey,
    pub ratio: f64,
    pub intersecting: bool,
}

/// Fraction of a section inside the viewport shrunk by `root_margin` on
/// top and bottom
pub fn visibility_ratio(bounds: SectionBounds, viewport_height: f64, root_margin: f64) -> f64 {
    if bounds.height <= 0.0 {
        return 0.0;
    }
    let root_top = root_margin;
    let root_bottom = (viewport_height - root_margin).max(root_top);
    let visible_top = bounds.top.max(root_top);
    let visible_bottom = (bounds.top + bounds.height).min(root_bottom);
    ((visible_bottom - visible_top).max(0.0) / bounds.height).clamp(0.0, 1.0)
}

/// The intersecting entry with the largest ratio (strictly above zero)
pub fn most_visible(entries: &[SectionVisibility]) -> Option<&SectionVisibility> {
    let mut best: Option<&SectionVisibility> = None;
    let mut max_ratio = 0.0;
    for entry in entries {
        if entry.intersecting && entry.ratio > max_ratio {
            max_ratio = entry.ratio;
            best = Some(entry);
        }
    }
    best
}

/// Section whose range holds `scroll_y + header_allowance`.
///
/// When ranges overlap the last matching section wins. Falls back to the
/// first section; `None` only for an empty layout.
pub fn section_at_offset(layout: &ScrollLayout, header_allowance: f64) -> Option<CohortKey> {
    let position = layout.scroll_y + header_allowance;
    let first = layout.sections.first().map(|(key, _)| key.clone())?;

    Some(
        layout
            .sections
            .iter()
            .filter(|(_, bounds)| bounds.contains(position))
            .last()
            .map(|(key, _)| key.clone())
            .unwrap_or(first),
    )
}

/// Reports sections only when they cross a threshold, like an
/// intersection observer. The first observation of a section is always
/// reported.
#[derive(Debug, Clone, Default)]
pub struct IntersectionTracker {
    /// Section -> (thresholds reached, intersecting)
    last: HashMap<CohortKey, (usize, bool)>,
}

impl IntersectionTracker {
    pub fn observe(
        &mut self,
        snapshot: &ViewportSnapshot,
        config: &NavigationConfig,
    ) -> Vec<SectionVisibility> {
        let mut changed = Vec::new();
        for (cohort, bounds) in &snapshot.sections {
            let ratio = visibility_ratio(*bounds, snapshot.viewport_height, config.root_margin);
            let intersecting = ratio > 0.0;
            let bucket = config.thresholds.iter().filter(|t| ratio >= **t).count();

            if self.last.get(cohort) != Some(&(bucket, intersecting)) {
                self.last.insert(cohort.clone(), (bucket, intersecting));
                changed.push(SectionVisibility {
                    cohort: cohort.clone(),
                    ratio,
                    intersecting,
                });
            }
        }
        changed
    }
}

pub struct NavigationSynchronizer {
    sections: Vec<CohortKey>,
    current: Option<CohortKey>,
    fragment: Option<CohortKey>,
    debounce: Debounce,
    tracker: IntersectionTracker,
    config: NavigationConfig,
}

impl NavigationSynchronizer {
    /// Start with the first section as current
    pub fn new(sections: Vec<CohortKey>, config: NavigationConfig) -> Self {
        Self {
            current: sections.first().cloned(),
            sections,
            fragment: None,
            debounce: Debounce::new(config.debounce),
            tracker: IntersectionTracker::default(),
            config,
        }
    }

    pub fn current(&self) -> Option<&CohortKey> {
        self.current.as_ref()
    }

    /// Fragment last written to history by the synchronizer
    pub fn fragment(&self) -> Option<&CohortKey> {
        self.fragment.as_ref()
    }

    pub fn sections(&self) -> &[CohortKey] {
        &self.sections
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn is_known(&self, cohort: &CohortKey) -> bool {
        self.sections.contains(cohort)
    }

    /// Menu click: highlight and scroll right away.
    ///
    /// Unknown sections are ignored.
    pub fn navigate_to(&mut self, cohort: &CohortKey) -> Vec<Effect> {
        if !self.is_known(cohort) {
            tracing::debug!(cohort = %cohort, "Ignoring navigation to unknown section");
            return Vec::new();
        }
        tracing::debug!(cohort = %cohort, "Navigating to section");
        self.current = Some(cohort.clone());
        vec![
            Effect::HighlightNav(cohort.clone()),
            Effect::ScrollToSection(cohort.clone()),
        ]
    }

    /// Navigation driven by the history fragment (deep link, back/forward).
    ///
    /// Same as [`navigate_to`](Self::navigate_to), and the fragment is
    /// recorded as already showing `cohort`.
    pub fn follow_fragment(&mut self, cohort: &CohortKey) -> Vec<Effect> {
        let effects = self.navigate_to(cohort);
        if !effects.is_empty() {
            self.fragment = Some(cohort.clone());
        }
        effects
    }

    /// Feed a fresh viewport measurement through the intersection tracker
    pub fn on_viewport(&mut self, snapshot: &ViewportSnapshot) -> Vec<Effect> {
        let entries = self.tracker.observe(snapshot, &self.config);
        self.on_intersections(&entries)
    }

    /// Visibility reports: the most visible section becomes current and the
    /// fragment follows it
    pub fn on_intersections(&mut self, entries: &[SectionVisibility]) -> Vec<Effect> {
        let Some(winner) = most_visible(entries) else {
            return Vec::new();
        };
        let cohort = winner.cohort.clone();

        let mut effects = vec![Effect::HighlightNav(cohort.clone())];
        if self.fragment.as_ref() != Some(&cohort) {
            self.fragment = Some(cohort.clone());
            effects.push(Effect::ReplaceFragment(cohort.clone()));
        }
        self.current = Some(cohort);
        effects
    }

    /// A scroll event: restart the fallback debounce
    pub fn on_scroll(&mut self) -> Effect {
        self.debounce.restart()
    }

    /// Debounce timer fired. Asks for a layout only if it is the latest one.
    pub fn on_scroll_settled(&mut self, generation: u64) -> Vec<Effect> {
        if self.debounce.settle(generation) {
            vec![Effect::MeasureScrollLayout]
        } else {
            Vec::new()
        }
    }

    /// Fallback detection from document offsets
    pub fn on_layout(&mut self, layout: &ScrollLayout) -> Vec<Effect> {
        let detected = section_at_offset(layout, self.config.header_allowance)
            .or_else(|| self.sections.first().cloned());

        match detected {
            Some(cohort) => {
                self.current = Some(cohort.clone());
                vec![Effect::HighlightNav(cohort)]
            }
            None => Vec::new(),
        }
    }
}

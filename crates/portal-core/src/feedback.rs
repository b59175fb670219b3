//! Transient feedback messages (toasts).
//!
//! A toast slides in shortly after it is created, stays for a dwell time
//! that depends on its kind, slides out and is then removed. Every step is a
//! deferred action so the core stays clock-free.

use std::time::Duration;

use crate::effects::{DeferredAction, Effect};
use crate::theme::ThemePreference;

/// Timings for the toast life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimings {
    /// Delay before the toast slides in
    pub reveal_after: Duration,
    /// Time from creation until a theme toast starts leaving
    pub theme_dwell: Duration,
    /// Time from creation until an apply toast starts leaving
    pub apply_dwell: Duration,
    /// Length of the slide-out transition
    pub exit: Duration,
}

impl Default for FeedbackTimings {
    fn default() -> Self {
        Self {
            reveal_after: Duration::from_millis(100),
            theme_dwell: Duration::from_millis(2000),
            apply_dwell: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    ThemeChanged(ThemePreference),
    ApplyConfirmed,
}

/// Where a toast is in its life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Off-screen, about to slide in
    Entering,
    Visible,
    /// Sliding out
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: FeedbackKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn message(&self) -> String {
        match self.kind {
            FeedbackKind::ThemeChanged(pref) => format!("{} activated", pref.label()),
            FeedbackKind::ApplyConfirmed => {
                "Application form opened! Your registration has been counted.".to_string()
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            FeedbackKind::ThemeChanged(pref) => pref.icon(),
            FeedbackKind::ApplyConfirmed => "✔",
        }
    }

    /// CSS classes for the toast element
    pub fn class(&self) -> &'static str {
        match (self.kind, self.phase) {
            (FeedbackKind::ThemeChanged(_), ToastPhase::Visible) => "theme-feedback visible",
            (FeedbackKind::ThemeChanged(_), _) => "theme-feedback",
            (FeedbackKind::ApplyConfirmed, ToastPhase::Visible) => "apply-feedback visible",
            (FeedbackKind::ApplyConfirmed, _) => "apply-feedback",
        }
    }
}

/// Currently displayed toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct FeedbackPresenter {
    toasts: Vec<Toast>,
    next_id: u64,
    timings: FeedbackTimings,
}

impl FeedbackPresenter {
    pub fn new(timings: FeedbackTimings) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            timings,
        }
    }

    /// Add a toast. Returns the timers driving it in and out.
    pub fn show(&mut self, kind: FeedbackKind) -> Vec<Effect> {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            phase: ToastPhase::Entering,
        });

        let dwell = match kind {
            FeedbackKind::ThemeChanged(_) => self.timings.theme_dwell,
            FeedbackKind::ApplyConfirmed => self.timings.apply_dwell,
        };

        vec![
            Effect::schedule(self.timings.reveal_after, DeferredAction::RevealToast(id)),
            Effect::schedule(dwell, DeferredAction::DismissToast(id)),
        ]
    }

    pub fn reveal(&mut self, id: u64) {
        if let Some(toast) = self.find_mut(id) {
            if toast.phase == ToastPhase::Entering {
                toast.phase = ToastPhase::Visible;
            }
        }
    }

    /// Start the slide-out; returns the timer that removes the toast
    pub fn dismiss(&mut self, id: u64) -> Vec<Effect> {
        let exit = self.timings.exit;
        match self.find_mut(id) {
            Some(toast) if toast.phase != ToastPhase::Leaving => {
                toast.phase = ToastPhase::Leaving;
                vec![Effect::schedule(exit, DeferredAction::RemoveToast(id))]
            }
            _ => Vec::new(),
        }
    }

    /// Drop a toast. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn timings(&self) -> &FeedbackTimings {
        &self.timings
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id == id)
    }
}

//! Debounce bookkeeping for deferred actions.
//!
//! The core cannot cancel a timer the shell already started, so every
//! schedule carries a generation number. Rescheduling bumps the generation,
//! which turns every earlier pending timer into a no-op when it fires.

use std::time::Duration;

use crate::effects::{DeferredAction, Effect};

/// A restartable one-shot timer
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: false,
        }
    }

    /// Cancel any pending timer and start a new one.
    ///
    /// Returns the [`Effect::Schedule`] the shell has to carry out.
    pub fn restart(&mut self) -> Effect {
        self.generation += 1;
        self.pending = true;
        Effect::schedule(
            self.delay,
            DeferredAction::ScrollSettled {
                generation: self.generation,
            },
        )
    }

    /// Called when a timer fires. True only for the latest, not yet
    /// consumed generation.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.pending && generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restart_schedules_with_delay() {
        let mut debounce = Debounce::new(Duration::from_millis(50));
        let effect = debounce.restart();
        assert_eq!(
            effect,
            Effect::Schedule {
                delay: Duration::from_millis(50),
                action: DeferredAction::ScrollSettled { generation: 1 },
            }
        );
        assert!(debounce.pending);
    }

    #[test]
    fn test_only_latest_generation_settles() {
        let mut debounce = Debounce::new(Duration::from_millis(50));
        debounce.restart();
        debounce.restart();
        debounce.restart();

        assert!(!debounce.settle(1));
        assert!(!debounce.settle(2));
        assert!(debounce.settle(3));
    }

    #[test]
    fn test_settles_at_most_once() {
        let mut debounce = Debounce::new(Duration::from_millis(50));
        debounce.restart();
        assert!(debounce.settle(1));
        assert!(!debounce.settle(1));
        assert!(!debounce.pending);
    }

    #[test]
    fn test_settle_without_restart() {
        let mut debounce = Debounce::new(Duration::from_millis(50));
        assert!(!debounce.settle(0));
    }
}

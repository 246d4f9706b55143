use std::time::{Duration, Instant};

/// Single-shot timer with reset semantics, driven by a monotonic clock.
///
/// The host polls it once per frame; rescheduling pushes the deadline out.
#[derive(Debug, Clone)]
pub(crate) struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    pub(crate) fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Disarm without firing.
    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Time left until the deadline, zero once it has passed.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once per scheduled deadline, on the first
    /// poll at or after it.
    pub(crate) fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

use std::time::{Duration, Instant};

/// Holds the latest input value and releases it once no newer value
/// has arrived for a full window. Intermediate values are never
/// released: each `note_input` replaces the pending value and restarts
/// the window.
///
/// The event loop owns the clock; every method takes an explicit
/// `Instant` so the window logic stays deterministic under test.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a new input value; any pending emission is discarded.
    pub fn note_input(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// The instant the pending value becomes due, if any. The event
    /// loop sleeps until exactly this point.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Take the pending value if its window has fully elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Debounced search input.
//!
//! Every keystroke re-arms the timer, so the query is only applied once
//! the user pauses typing. The state is driven by injected instants and
//! polled from the app tick subscription, which keeps it testable
//! without real timers.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the query taking effect.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Pending search text waiting out its debounce delay.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records new input at `now`, cancelling any pending text.
    pub fn push(&mut self, text: String, now: Instant) {
        self.pending = Some((text, now));
    }

    /// Returns the settled text once the delay has elapsed since the
    /// last `push`, clearing the pending state.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (_, armed_at) = self.pending.as_ref()?;
        if now.duration_since(*armed_at) >= self.delay {
            self.pending.take().map(|(text, _)| text)
        } else {
            None
        }
    }

    /// Whether input is waiting to settle (drives the tick subscription).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops pending input without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_before_delay_returns_nothing() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.push("ray".to_string(), start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn poll_after_delay_yields_the_text() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.push("ray".to_string(), start);
        assert_eq!(
            debouncer.poll(start + SEARCH_DEBOUNCE),
            Some("ray".to_string())
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn new_input_restarts_the_delay() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.push("r".to_string(), start);
        debouncer.push("ra".to_string(), start + Duration::from_millis(200));

        // 300ms after the first keystroke, only 100ms after the second.
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("ra".to_string())
        );
    }

    #[test]
    fn cancel_drops_pending_input() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.push("ray".to_string(), start);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + SEARCH_DEBOUNCE), None);
    }

    #[test]
    fn poll_is_idempotent_once_drained() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.push("ray".to_string(), start);
        assert!(debouncer.poll(start + SEARCH_DEBOUNCE).is_some());
        assert_eq!(debouncer.poll(start + SEARCH_DEBOUNCE * 2), None);
    }
}

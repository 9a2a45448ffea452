//! Per-key cache entry.

use std::time::{Duration, Instant};

use crate::State;

/// Cached state and refresh bookkeeping for one key.
#[derive(Debug)]
pub(crate) struct Entry<V> {
    /// The state visible to readers.
    pub state: Option<State<V>>,

    /// When the last computation completed, successfully or not.
    pub refreshed_at: Option<Instant>,

    /// When the key was last requested.
    pub requested_at: Option<Instant>,

    /// Whether a computation is currently running for this key.
    pub in_flight: bool,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            state: None,
            refreshed_at: None,
            requested_at: None,
            in_flight: false,
        }
    }
}

impl<V> Entry<V> {
    /// Whether the entry is older than `interval` at `now`.
    ///
    /// An entry that never completed a computation is always stale.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        match self.refreshed_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) > interval,
        }
    }

    /// Mark the entry as refreshing if it is stale and idle.
    ///
    /// Returns `true` if the caller must start a computation.
    pub fn begin_refresh(&mut self, now: Instant, interval: Duration) -> bool {
        if self.in_flight || !self.is_stale(now, interval) {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Store a successful computation.
    pub fn complete(&mut self, now: Instant, value: V) {
        self.state = Some(State::Ready(value));
        self.finish(now);
    }

    /// Record a failed computation, keeping the last good value if any.
    pub fn fail(&mut self, now: Instant) {
        if self.state.is_none() {
            self.state = Some(State::Unavailable);
        }
        self.finish(now);
    }

    /// Clear the in-flight flag and restart the staleness interval.
    fn finish(&mut self, now: Instant) {
        self.in_flight = false;
        self.refreshed_at = Some(now);
    }

    /// Whether the entry has been idle for longer than `idle` at `now`.
    pub fn is_idle(&self, now: Instant, idle: Duration) -> bool {
        if self.in_flight {
            return false;
        }
        match self.requested_at {
            None => true,
            Some(at) => now.saturating_duration_since(at) > idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(60);

    #[test]
    fn new_entry_is_stale() {
        let entry = Entry::<u32>::default();
        assert!(entry.is_stale(Instant::now(), INTERVAL));
    }

    #[test]
    fn begin_refresh_guards_in_flight() {
        let now = Instant::now();
        let mut entry = Entry::<u32>::default();

        assert!(entry.begin_refresh(now, INTERVAL));
        assert!(!entry.begin_refresh(now, INTERVAL));

        entry.complete(now, 3);
        assert!(!entry.begin_refresh(now + INTERVAL, INTERVAL));
        assert!(entry.begin_refresh(now + INTERVAL + Duration::from_secs(1), INTERVAL));
    }

    #[test]
    fn failure_keeps_previous_value() {
        let now = Instant::now();
        let mut entry = Entry::default();

        entry.fail(now);
        assert_eq!(entry.state, Some(State::Unavailable));

        entry.complete(now, 7);
        entry.fail(now);
        assert_eq!(entry.state, Some(State::Ready(7)));
        assert!(!entry.in_flight);
    }

    #[test]
    fn in_flight_entry_is_never_idle() {
        let now = Instant::now();
        let mut entry = Entry::<u32>::default();
        entry.requested_at = Some(now);
        entry.in_flight = true;

        assert!(!entry.is_idle(now + Duration::from_secs(3600), Duration::from_secs(1)));
    }
}

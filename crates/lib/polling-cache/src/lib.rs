//! Keyed polling cache.
//!
//! Serves the last computed value for a key and refreshes it on a
//! background task once it gets older than the configured interval. At most
//! one computation runs per key at a time, and readers never wait for one.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures_util::FutureExt as _;

mod entry;
mod state;

use entry::Entry;

pub use polling_cache_core::{
    Clock, Compute, Event, LogEvents, Notify, PanicPayload, SystemClock, panic_message,
};
pub use state::State;

/// Parameters for [`PollingCache::new`].
pub struct Params<Compute, Clock, Notify> {
    /// Computes fresh values.
    pub compute: Compute,

    /// Time source for staleness checks.
    pub clock: Clock,

    /// Receives refresh events, including failures.
    pub notify: Notify,

    /// How long a computed value stays fresh.
    pub interval: Duration,

    /// Runtime to spawn the background refresh tasks on.
    pub runtime: tokio::runtime::Handle,
}

/// A keyed cache refreshed by background computations.
///
/// Cloning is cheap; clones share the same entries.
pub struct PollingCache<Key, C, Clk = SystemClock, N = LogEvents>
where
    C: Compute<Key>,
{
    /// Shared state.
    inner: Arc<Inner<Key, C, Clk, N>>,
}

/// The state shared between the cache handles and the refresh tasks.
struct Inner<Key, C, Clk, N>
where
    C: Compute<Key>,
{
    /// Computes fresh values.
    compute: C,

    /// Time source.
    clock: Clk,

    /// Event receiver.
    notify: N,

    /// Freshness interval.
    interval: Duration,

    /// Runtime for refresh tasks.
    runtime: tokio::runtime::Handle,

    /// Entries by key.
    entries: Mutex<HashMap<Key, Entry<C::Value>>>,
}

impl<Key, C, Clk, N> Clone for PollingCache<Key, C, Clk, N>
where
    C: Compute<Key>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Key, C, Clk, N> PollingCache<Key, C, Clk, N>
where
    Key: Clone + Eq + Hash + Send + Sync + 'static,
    C: Compute<Key>,
    Clk: Clock,
    N: Notify<Key, C::Error>,
{
    /// Create an empty cache.
    pub fn new(params: Params<C, Clk, N>) -> Self {
        let Params {
            compute,
            clock,
            notify,
            interval,
            runtime,
        } = params;

        Self {
            inner: Arc::new(Inner {
                compute,
                clock,
                notify,
                interval,
                runtime,
                entries: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Get the current state for the key, scheduling a refresh if it is stale.
    ///
    /// Returns `None` until the first computation for the key completes.
    /// Never waits for a computation.
    pub fn request(&self, key: &Key) -> Option<State<C::Value>> {
        let now = self.inner.clock.now();

        let (state, schedule) = {
            let mut entries = self.inner.lock_entries();
            let entry = entries.entry(key.clone()).or_default();
            entry.requested_at = Some(now);
            let schedule = entry.begin_refresh(now, self.inner.interval);
            (entry.state.clone(), schedule)
        };

        if schedule {
            let inner = Arc::clone(&self.inner);
            let key = key.clone();
            drop(self.inner.runtime.spawn(inner.refresh(key)));
        }

        state
    }

    /// Get the current state for the key without scheduling anything.
    pub fn peek(&self, key: &Key) -> Option<State<C::Value>> {
        let entries = self.inner.lock_entries();
        entries.get(key).and_then(|entry| entry.state.clone())
    }

    /// Whether a computation is running for the key.
    pub fn is_in_flight(&self, key: &Key) -> bool {
        let entries = self.inner.lock_entries();
        entries.get(key).is_some_and(|entry| entry.in_flight)
    }

    /// Drop entries that have not been requested for longer than `idle`.
    ///
    /// Entries with a computation in flight are kept. Returns the number of
    /// removed entries.
    pub fn prune(&self, idle: Duration) -> usize {
        let now = self.inner.clock.now();
        let mut entries = self.inner.lock_entries();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_idle(now, idle));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = entries.len(), "pruned idle cache entries");
        }
        removed
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock_entries().len()
    }

    /// Whether the cache has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The freshness interval.
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }
}

impl<Key, C, Clk, N> Inner<Key, C, Clk, N>
where
    Key: Clone + Eq + Hash + Send + Sync + 'static,
    C: Compute<Key>,
    Clk: Clock,
    N: Notify<Key, C::Error>,
{
    /// Lock the entries.
    ///
    /// A poisoned lock is recovered: entries are only touched by
    /// non-panicking bookkeeping.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<Key, Entry<C::Value>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one computation for the key and store its outcome.
    async fn refresh(self: Arc<Self>, key: Key) {
        self.notify.notify(&key, Event::Started);

        // Run the computation and catch panics coming from the future.
        let work = core::panic::AssertUnwindSafe(async { self.compute.compute(&key).await });
        let outcome = work.catch_unwind().await;

        let now = self.clock.now();
        let event = {
            let mut entries = self.lock_entries();
            let entry = entries.entry(key.clone()).or_default();
            match outcome {
                Ok(Ok(value)) => {
                    entry.complete(now, value);
                    Event::Updated
                }
                Ok(Err(error)) => {
                    entry.fail(now);
                    Event::Failed { error }
                }
                Err(panic_payload) => {
                    entry.fail(now);
                    Event::Panicked { panic_payload }
                }
            }
        };

        self.notify.notify(&key, event);
    }
}

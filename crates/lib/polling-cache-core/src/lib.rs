//! Polling cache core.
//!
//! The traits at the seams of the polling cache: what computes a value,
//! what tells the time, and who hears about refreshes.

use std::time::Instant;

/// The panic payload type alias.
pub type PanicPayload = Box<dyn core::any::Any + Send + 'static>;

/// A computation producing a fresh value for a key.
pub trait Compute<Key>: Send + Sync + 'static {
    /// The computed value.
    type Value: Clone + Send + Sync + 'static;

    /// An error that the computation may fail with.
    type Error: Send + 'static;

    /// Compute the value for the given key.
    fn compute<'a>(
        &'a self,
        key: &'a Key,
    ) -> impl core::future::Future<Output = Result<Self::Value, Self::Error>> + Send + 'a;
}

impl<Key, Value, Error, F, Fut> Compute<Key> for F
where
    Key: Clone,
    Value: Clone + Send + Sync + 'static,
    Error: Send + 'static,
    F: Fn(Key) -> Fut + Send + Sync + 'static,
    Fut: core::future::Future<Output = Result<Value, Error>> + Send + 'static,
{
    type Value = Value;
    type Error = Error;

    fn compute<'a>(
        &'a self,
        key: &'a Key,
    ) -> impl core::future::Future<Output = Result<Self::Value, Self::Error>> + Send + 'a {
        (self)(key.clone())
    }
}

/// A source of the current time.
pub trait Clock: Send + Sync + 'static {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Event reported for a key while refreshing it.
#[derive(Debug)]
pub enum Event<E> {
    /// The computation is about to be invoked.
    Started,

    /// The computation succeeded and the cached value was replaced.
    Updated,

    /// The computation returned an error.
    ///
    /// The previously cached value stays in place.
    Failed {
        /// The error that was returned by the computation.
        error: E,
    },

    /// The computation panicked.
    ///
    /// Handled the same way as an error.
    Panicked {
        /// The captured panic payload.
        panic_payload: PanicPayload,
    },
}

/// Receiver of refresh events.
pub trait Notify<Key, E>: Send + Sync + 'static {
    /// Handle an event for the given key.
    fn notify(&self, key: &Key, event: Event<E>);
}

impl<Key, E, F> Notify<Key, E> for F
where
    F: Fn(&Key, Event<E>) + Send + Sync + 'static,
{
    fn notify(&self, key: &Key, event: Event<E>) {
        (self)(key, event)
    }
}

/// Notifier that reports events to `tracing`.
///
/// Failures are logged as warnings, everything else at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

impl<Key, E> Notify<Key, E> for LogEvents
where
    Key: core::fmt::Debug,
    E: core::fmt::Display,
{
    fn notify(&self, key: &Key, event: Event<E>) {
        match event {
            Event::Started => tracing::debug!(?key, "refresh started"),
            Event::Updated => tracing::debug!(?key, "refresh done"),
            Event::Failed { error } => {
                tracing::warn!(?key, %error, "refresh failed, keeping the previous value")
            }
            Event::Panicked { panic_payload } => tracing::warn!(
                ?key,
                panic = panic_message(&panic_payload),
                "refresh panicked, keeping the previous value"
            ),
        }
    }
}

/// Extract a printable message from a panic payload.
pub fn panic_message(panic_payload: &PanicPayload) -> &str {
    if let Some(message) = panic_payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = panic_payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

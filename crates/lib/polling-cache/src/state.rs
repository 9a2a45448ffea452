//! Cached state as seen by readers.

/// The cached state for a key.
///
/// Absence of a state (`None` from the cache) means no computation has
/// completed yet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum State<V> {
    /// The last successfully computed value.
    Ready(V),

    /// No computation has ever succeeded for this key.
    Unavailable,
}

impl<V> State<V> {
    /// Take the value, if there is one.
    pub fn into_ready(self) -> Option<V> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

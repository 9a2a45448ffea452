//! Password wrapper type.

/// Wrapper for sensitive passwords.
///
/// Compares and hashes by value so it can be part of a cache key, but never
/// prints the value.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Password(String);

impl Password {
    /// Create a new password wrapper.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner password value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***redacted***)")
    }
}

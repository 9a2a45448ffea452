//! Error types.

/// Invalid segment configuration.
#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum ConfigError {
    /// No username configured.
    #[error("username is not configured")]
    MissingUsername,

    /// No password configured.
    #[error("password is not configured")]
    MissingPassword,

    /// A zero refresh interval would refresh on every render.
    #[error("refresh interval must be greater than zero")]
    ZeroInterval,

    /// A zero tick would render in a busy loop.
    #[error("tick must be greater than zero")]
    ZeroTick,

    /// A zero timeout would fail every query.
    #[error("query timeout must be greater than zero")]
    ZeroTimeout,
}

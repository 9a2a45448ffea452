//! Shared configuration types for the mail status segments.
//!
//! Every field is optional; defaults are applied when a segment is built.

/// Root configuration.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", deny_unknown_fields))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// How long a fetched count stays fresh (seconds).
    #[cfg_attr(feature = "serde", serde(default))]
    pub interval_secs: Option<u64>,

    /// How often the host re-renders the status line (seconds).
    #[cfg_attr(feature = "serde", serde(default))]
    pub tick_secs: Option<u64>,

    /// Limit for one whole unseen count query (seconds).
    #[cfg_attr(feature = "serde", serde(default))]
    pub timeout_secs: Option<u64>,

    /// Segments to render, in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub segments: Vec<SegmentConfig>,
}

/// One unread-mail segment.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", deny_unknown_fields))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentConfig {
    /// Human-friendly name for logging.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,

    /// Login username.
    #[cfg_attr(feature = "serde", serde(default))]
    pub username: Option<String>,

    /// Login password.
    #[cfg_attr(feature = "serde", serde(default))]
    pub password: Option<String>,

    /// IMAP server hostname.
    #[cfg_attr(feature = "serde", serde(default))]
    pub server: Option<String>,

    /// IMAP server port.
    #[cfg_attr(feature = "serde", serde(default))]
    pub port: Option<u16>,

    /// Folder to check.
    #[cfg_attr(feature = "serde", serde(default))]
    pub folder: Option<String>,

    /// Whether to use implicit TLS. Inferred from the port when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_ssl: Option<bool>,

    /// Count at which the gradient saturates. No gradient when unset.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_msgs: Option<u32>,

    /// Highlight group.
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlight_group: Option<String>,

    /// Highlight group for the gradient mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlight_group_gradient: Option<String>,

    /// Text shown in front of the count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub before: Option<String>,
}

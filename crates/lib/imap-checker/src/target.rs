//! Mailbox target.

/// The well-known port for IMAP over implicit TLS.
pub const IMAP_SSL_PORT: u16 = 993;

/// Everything needed to reach and query one mailbox.
///
/// Equal targets share one polling cycle, so this is also the cache key.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Target {
    /// Username for authentication.
    pub username: String,

    /// Password for authentication.
    pub password: crate::Password,

    /// IMAP server hostname.
    pub server: String,

    /// IMAP server port.
    pub port: u16,

    /// Folder to count unseen messages in (usually `INBOX`).
    pub folder: String,

    /// Whether to use implicit TLS. Plaintext otherwise.
    pub use_ssl: bool,
}

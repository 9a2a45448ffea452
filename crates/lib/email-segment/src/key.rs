//! Polling target derivation.

use imap_checker::{IMAP_SSL_PORT, Password, Target};

use crate::ConfigError;

/// Default IMAP server.
pub const DEFAULT_SERVER: &str = "imap.gmail.com";

/// Default IMAP port.
pub const DEFAULT_PORT: u16 = IMAP_SSL_PORT;

/// Default folder.
pub const DEFAULT_FOLDER: &str = "INBOX";

/// Whether to use implicit TLS when not configured explicitly.
pub const fn default_use_ssl(port: u16) -> bool {
    port == IMAP_SSL_PORT
}

/// Derive the normalized polling target for a segment config.
///
/// Segments with equal targets share one polling cycle.
pub fn derive_key(config: &config_core::SegmentConfig) -> Result<Target, ConfigError> {
    let username = non_empty(config.username.as_deref()).ok_or(ConfigError::MissingUsername)?;
    let password = non_empty(config.password.as_deref()).ok_or(ConfigError::MissingPassword)?;

    let server = non_empty(config.server.as_deref()).unwrap_or(DEFAULT_SERVER);
    let port = config.port.unwrap_or(DEFAULT_PORT);
    let folder = non_empty(config.folder.as_deref()).unwrap_or(DEFAULT_FOLDER);
    let use_ssl = config.use_ssl.unwrap_or_else(|| default_use_ssl(port));

    Ok(Target {
        username: username.to_owned(),
        password: Password::new(password),
        server: server.to_owned(),
        port,
        folder: folder.to_owned(),
        use_ssl,
    })
}

/// Treat empty strings as unset.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

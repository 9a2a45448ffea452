//! IMAP unseen-message checker.

mod fetch_unseen;
mod password;
mod target;
mod tls;

pub use fetch_unseen::*;
pub use password::*;
pub use target::*;
pub use tls::TlsConnectError;

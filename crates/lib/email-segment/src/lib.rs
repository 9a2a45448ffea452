//! Unread IMAP mail status segment.
//!
//! Lifts a sparse [`config_core::SegmentConfig`] into a polling target,
//! asks the shared polling cache for the unseen count and renders it.

mod error;
mod fetch;
mod key;
mod segment;
mod settings;

pub use error::*;
pub use fetch::*;
pub use key::*;
pub use segment::*;
pub use settings::*;

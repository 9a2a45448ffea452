//! The cache computation and the cache type built on it.

use std::time::Duration;

use imap_checker::{FetchError, Target};
use polling_cache::{Compute, LogEvents, Params, PollingCache, SystemClock};

use crate::Settings;

/// Computes the unseen count of a target over IMAP.
#[derive(Debug, Clone, Copy)]
pub struct FetchUnseen {
    /// Limit for one whole query.
    pub timeout: Duration,
}

impl Compute<Target> for FetchUnseen {
    type Value = u32;
    type Error = FetchError;

    fn compute<'a>(
        &'a self,
        key: &'a Target,
    ) -> impl core::future::Future<Output = Result<Self::Value, Self::Error>> + Send + 'a {
        imap_checker::fetch_unseen(key, self.timeout)
    }
}

/// The unseen count cache shared by all mail segments of a process.
pub type UnseenCache = PollingCache<Target, FetchUnseen, SystemClock, LogEvents>;

/// Build the shared unseen count cache.
pub fn unseen_cache(settings: &Settings, runtime: tokio::runtime::Handle) -> UnseenCache {
    PollingCache::new(Params {
        compute: FetchUnseen {
            timeout: settings.timeout,
        },
        clock: SystemClock,
        notify: LogEvents,
        interval: settings.interval,
        runtime,
    })
}

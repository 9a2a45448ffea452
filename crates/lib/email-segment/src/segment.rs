//! The unread mail segment.

use imap_checker::Target;
use polling_cache::{Clock, Compute, LogEvents, Notify, PollingCache, State, SystemClock};
use segment_render::RenderUnit;

use crate::{ConfigError, FetchUnseen, derive_key};

/// A status segment showing the unread count of one IMAP folder.
pub struct EmailImapAlert<C = FetchUnseen, Clk = SystemClock, N = LogEvents>
where
    C: Compute<Target, Value = u32>,
{
    /// Name for logging.
    name: String,

    /// The polling target.
    key: Target,

    /// Rendering options.
    options: segment_render::Options,

    /// The shared cache.
    cache: PollingCache<Target, C, Clk, N>,
}

impl<C, Clk, N> EmailImapAlert<C, Clk, N>
where
    C: Compute<Target, Value = u32>,
    Clk: Clock,
    N: Notify<Target, C::Error>,
{
    /// Validate the config and build a segment reading from `cache`.
    pub fn new(
        config: &config_core::SegmentConfig,
        cache: PollingCache<Target, C, Clk, N>,
    ) -> Result<Self, ConfigError> {
        let key = derive_key(config)?;

        let name = config.name.clone().unwrap_or_else(|| {
            format!("{}@{}/{}", key.username, key.server, key.folder)
        });

        let defaults = segment_render::Options::default();
        let options = segment_render::Options {
            max: config.max_msgs,
            highlight_group: config
                .highlight_group
                .clone()
                .unwrap_or(defaults.highlight_group),
            highlight_group_gradient: config
                .highlight_group_gradient
                .clone()
                .unwrap_or(defaults.highlight_group_gradient),
            before: config.before.clone().unwrap_or(defaults.before),
        };

        tracing::debug!(
            segment = %name,
            imap_host = %key.server,
            imap_port = key.port,
            imap_folder = %key.folder,
            use_ssl = key.use_ssl,
            "mail segment configured"
        );

        Ok(Self {
            name,
            key,
            options,
            cache,
        })
    }

    /// The segment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The polling target.
    pub fn key(&self) -> &Target {
        &self.key
    }

    /// The rendering options.
    pub fn options(&self) -> &segment_render::Options {
        &self.options
    }

    /// The cached unread count state, scheduling a refresh when stale.
    pub fn state(&self) -> Option<State<u32>> {
        self.cache.request(&self.key)
    }

    /// Render the segment.
    ///
    /// Renders nothing while no count is known, after the first fetch
    /// failed, or when there is no unread mail.
    pub fn render(&self) -> Option<Vec<RenderUnit>> {
        let count = self.state().and_then(State::into_ready);
        segment_render::render(count, &self.options)
    }
}

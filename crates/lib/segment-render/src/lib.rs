//! Status-line rendering of a count.
//!
//! Pure functions turning an optional count into render units: the text to
//! show, the highlight groups to color it with, and an optional gradient
//! level.

/// Default highlight group for a flat highlight.
pub const DEFAULT_HIGHLIGHT_GROUP: &str = "email_alert";

/// Default highlight group for a gradient highlight.
pub const DEFAULT_HIGHLIGHT_GROUP_GRADIENT: &str = "email_alert_gradient";

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Count at which the gradient saturates.
    ///
    /// `None` or zero renders a flat highlight.
    pub max: Option<u32>,

    /// Highlight group used in both modes.
    pub highlight_group: String,

    /// Highlight group preferred in gradient mode.
    pub highlight_group_gradient: String,

    /// Text shown in front of the count.
    pub before: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max: None,
            highlight_group: DEFAULT_HIGHLIGHT_GROUP.to_owned(),
            highlight_group_gradient: DEFAULT_HIGHLIGHT_GROUP_GRADIENT.to_owned(),
            before: String::new(),
        }
    }
}

/// A piece of rendered output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderUnit {
    /// Text to display.
    pub contents: String,

    /// Highlight groups, most specific first.
    pub highlight_groups: Vec<String>,

    /// Gradient level in `[0, 100]`, if gradient highlighting applies.
    pub gradient_level: Option<f64>,
}

impl core::fmt::Display for RenderUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.contents)
    }
}

/// Render a count.
///
/// Nothing is rendered for an absent or zero count.
pub fn render(count: Option<u32>, options: &Options) -> Option<Vec<RenderUnit>> {
    let count = count.filter(|count| *count != 0)?;
    let contents = format!("{}{}", options.before, count);

    let unit = match options.max.filter(|max| *max != 0) {
        None => RenderUnit {
            contents,
            highlight_groups: vec![options.highlight_group.clone()],
            gradient_level: None,
        },
        Some(max) => RenderUnit {
            contents,
            highlight_groups: vec![
                options.highlight_group_gradient.clone(),
                options.highlight_group.clone(),
            ],
            gradient_level: Some(gradient_level(count, max)),
        },
    };

    Some(vec![unit])
}

/// Scale `count` against `max` to a percentage saturating at 100.
pub fn gradient_level(count: u32, max: u32) -> f64 {
    if max == 0 {
        return 100.0;
    }
    (f64::from(count) * 100.0 / f64::from(max)).min(100.0)
}

//! Status line formatting.

/// Separator between rendered units.
const SEPARATOR: &str = " | ";

/// Join the contents of the render units into one line.
pub fn format<I>(units: I) -> String
where
    I: IntoIterator<Item = segment_render::RenderUnit>,
{
    let mut line = String::new();
    for unit in units {
        tracing::trace!(
            contents = %unit.contents,
            highlight_groups = ?unit.highlight_groups,
            gradient_level = ?unit.gradient_level,
            "rendering unit"
        );
        if !line.is_empty() {
            line.push_str(SEPARATOR);
        }
        line.push_str(&unit.contents);
    }
    line
}

use ratatui::prelude::*;

use crate::config::Config;

/// Render a skill list as bracketed tags, wrapped to the given width.
/// One tag per entry; the grouping into rows is pure layout.
pub fn tag_rows(skills: &'static [&'static str], width: u16, config: &Config) -> Vec<Line<'static>> {
    let style = config.style("tag");
    let mut rows: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for skill in skills {
        let tag_width = skill.len() + 2;
        let gap = usize::from(!current.is_empty());
        if !current.is_empty() && current_width + gap + tag_width > width as usize {
            rows.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            current_width += 1;
        }
        current.push(Span::styled(format!("[{skill}]"), style));
        current_width += tag_width;
    }
    if !current.is_empty() {
        rows.push(Line::from(current));
    }

    rows
}

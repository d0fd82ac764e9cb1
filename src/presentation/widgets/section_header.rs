use ratatui::prelude::*;

use crate::{config::Config, text::wrap_text};

/// Standard panel heading: dim ordinal, bold title, optional wrapped
/// subtitle, then a blank separator line.
pub fn heading(
    number: &'static str,
    title: &'static str,
    subtitle: Option<&str>,
    width: u16,
    config: &Config,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(number, config.style("section_number"))),
        Line::from(Span::styled(title, config.style("section_title"))),
    ];
    if let Some(subtitle) = subtitle {
        let style = config.style("section_subtitle");
        for row in wrap_text(subtitle, width as usize).lines() {
            lines.push(Line::from(Span::styled(row.to_string(), style)));
        }
    }
    lines.push(Line::default());
    lines
}

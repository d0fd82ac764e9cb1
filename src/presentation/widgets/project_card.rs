use ratatui::prelude::*;

use crate::{config::Config, content::Project, text::wrap_text};

/// One work-grid entry: numbered title with the year on the first row,
/// wrapped description, then tech and category metadata.
pub fn card_lines(
    index: usize,
    project: &'static Project,
    width: u16,
    config: &Config,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("0{}", index + 1), config.style("section_number")),
        Span::raw("  "),
        Span::styled(project.title, config.style("section_title")),
        Span::raw("  "),
        Span::styled(project.year, config.style("section_subtitle")),
    ])];

    let body_width = width.saturating_sub(4) as usize;
    for row in wrap_text(project.description, body_width).lines() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::raw(row.to_string()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(project.tech, config.style("tag")),
        Span::styled(
            format!(" · {}", project.category),
            config.style("section_subtitle"),
        ),
    ]));
    lines.push(Line::default());

    lines
}

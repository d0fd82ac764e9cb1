use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::{
    content::{ABOUT_PARAGRAPHS, EXPERIENCE, SKILL_GROUPS},
    presentation::widgets::{section_header, skill_tags},
    state::{AppState, Section},
    text::wrap_text,
    tui::Frame,
};

pub fn view(state: &AppState, frame: &mut Frame<'_>, area: Rect) -> usize {
    let inner = super::inner(area);
    let config = &state.config.config;
    let width = super::text_width(inner);

    let mut lines =
        section_header::heading(Section::About.number(), "About Me", None, inner.width, config);

    for paragraph in ABOUT_PARAGRAPHS {
        for row in wrap_text(paragraph, width).lines() {
            lines.push(Line::from(row.to_string()));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Experience",
        config.style("section_title"),
    )));
    lines.push(Line::default());
    for entry in EXPERIENCE {
        lines.push(Line::from(vec![
            Span::styled(entry.role, config.style("section_title")),
            Span::styled(
                format!("  ·  {}", entry.period),
                config.style("section_subtitle"),
            ),
        ]));
        for row in wrap_text(entry.summary, width).lines() {
            lines.push(Line::from(row.to_string()));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Technical Skills",
        config.style("section_title"),
    )));
    lines.push(Line::default());
    for group in SKILL_GROUPS {
        lines.push(Line::from(Span::styled(
            group.name,
            config.style("section_subtitle"),
        )));
        lines.extend(skill_tags::tag_rows(group.skills, width as u16, config));
        lines.push(Line::default());
    }

    let total = lines.len();
    let offset = super::scroll_offset(state);
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((offset, 0)), inner);

    total
}

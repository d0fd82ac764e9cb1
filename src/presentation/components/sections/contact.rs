use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::{
    content::{CONTACT_CHANNELS, CONTACT_HEADLINE, CONTACT_TEXT, PROJECT_TYPES},
    presentation::widgets::section_header,
    state::{AppState, Section},
    text::wrap_text,
    tui::Frame,
};

pub fn view(state: &AppState, frame: &mut Frame<'_>, area: Rect) -> usize {
    let inner = super::inner(area);
    let config = &state.config.config;
    let width = super::text_width(inner);

    let mut lines = section_header::heading(
        Section::Contact.number(),
        CONTACT_HEADLINE,
        None,
        inner.width,
        config,
    );

    for row in wrap_text(CONTACT_TEXT, width).lines() {
        lines.push(Line::from(row.to_string()));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Reach me",
        config.style("section_title"),
    )));
    lines.push(Line::default());
    for channel in CONTACT_CHANNELS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", channel.label),
                config.style("section_subtitle"),
            ),
            Span::raw(channel.value),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Project types I take on",
        config.style("section_title"),
    )));
    lines.push(Line::default());
    for project_type in PROJECT_TYPES {
        lines.push(Line::from(format!("  - {project_type}")));
    }

    let total = lines.len();
    let offset = super::scroll_offset(state);
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((offset, 0)), inner);

    total
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_view_renders_headline_channels_and_types() {
        let state = AppState::new();
        let backend = TestBackend::new(90, 40);
        let mut terminal = Terminal::new(backend).expect("test terminal");

        let mut total = 0;
        terminal
            .draw(|frame| {
                let area = frame.area();
                total = view(&state, frame, area);
            })
            .expect("draw");

        assert!(total > 10);
        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Let's Build Something Amazing"));
        assert!(content.contains("tanuja.dev@gmail.com"));
        assert!(content.contains("E-commerce Solution"));
    }
}

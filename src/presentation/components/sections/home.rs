use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::{
    content::PROFILE,
    presentation::hits::{ClickAction, HitMap},
    state::{pointer::Target, AppState, Section},
    text::wrap_text,
    tui::Frame,
};

const PRIMARY_ACTION: &str = "[ View My Work ]";
const SECONDARY_ACTION: &str = "[ Get in Touch ]";
const ACTION_GAP: u16 = 3;

pub fn view(state: &AppState, frame: &mut Frame<'_>, area: Rect, hits: &mut HitMap) -> usize {
    let inner = super::inner(area);
    let config = &state.config.config;

    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            format!(" {} ", PROFILE.availability),
            config.style("badge"),
        )),
        Line::default(),
        Line::from(Span::styled(
            PROFILE.title_lines[0],
            config.style("hero_title"),
        )),
        Line::from(Span::styled(
            PROFILE.title_lines[1],
            config.style("hero_title_outline"),
        )),
        Line::from(Span::styled(
            PROFILE.title_lines[2],
            config.style("hero_title"),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(PROFILE.name, config.style("hero_name")),
            Span::styled(
                format!("  ·  {}", PROFILE.location),
                config.style("hero_location"),
            ),
        ]),
        Line::default(),
    ];
    for row in wrap_text(PROFILE.description, super::text_width(inner)).lines() {
        lines.push(Line::from(row.to_string()));
    }
    lines.push(Line::default());

    let action_row = lines.len();
    lines.push(Line::from(vec![
        Span::styled(PRIMARY_ACTION, config.style("action_button")),
        Span::raw("   "),
        Span::styled(SECONDARY_ACTION, config.style("action_button_alt")),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Scroll ↓",
        config.style("hero_scroll"),
    )));

    let total = lines.len();
    let offset = super::scroll_offset(state);
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((offset, 0)), inner);

    // The call-to-action buttons are clickable while their row is visible
    if action_row >= offset as usize {
        let row = inner.y + (action_row - offset as usize) as u16;
        if row < inner.bottom() {
            let primary = Rect {
                x: inner.x,
                y: row,
                width: PRIMARY_ACTION.len() as u16,
                height: 1,
            }
            .intersection(inner);
            hits.record_magnetic(
                primary,
                ClickAction::Navigate(Section::Work),
                Target::ActionButton(Section::Work),
            );

            let secondary = Rect {
                x: inner.x + PRIMARY_ACTION.len() as u16 + ACTION_GAP,
                y: row,
                width: SECONDARY_ACTION.len() as u16,
                height: 1,
            }
            .intersection(inner);
            hits.record_magnetic(
                secondary,
                ClickAction::Navigate(Section::Contact),
                Target::ActionButton(Section::Contact),
            );
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn test_view_renders_hero_and_records_actions() {
        let state = AppState::new();
        let mut hits = HitMap::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");

        let mut total = 0;
        terminal
            .draw(|frame| {
                let area = frame.area();
                total = view(&state, frame, area, &mut hits);
            })
            .expect("draw");

        assert!(total > 10);
        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Full Stack"));
        assert!(content.contains("Tanuja"));
        assert!(content.contains("View My Work"));

        // Both call-to-action buttons resolved to clickable regions
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_actions_are_not_recorded_once_scrolled_out_of_view() {
        let mut state = AppState::new();
        state
            .view
            .update(crate::state::view::Message::ScrolledTo(200));
        let mut hits = HitMap::new();
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).expect("test terminal");

        terminal
            .draw(|frame| {
                let area = frame.area();
                view(&state, frame, area, &mut hits);
            })
            .expect("draw");

        assert!(hits.is_empty());
    }
}

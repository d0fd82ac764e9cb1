use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::{
    content::{PROJECTS, WORK_SUBTITLE},
    presentation::hits::{ClickAction, HitMap},
    presentation::widgets::{project_card, section_header},
    state::{pointer::Target, AppState, Section},
    tui::Frame,
};

const CTA: &str = "[ Interested in working together? ]";

pub fn view(state: &AppState, frame: &mut Frame<'_>, area: Rect, hits: &mut HitMap) -> usize {
    let inner = super::inner(area);
    let config = &state.config.config;
    let width = super::text_width(inner) as u16;

    let mut lines = section_header::heading(
        Section::Work.number(),
        "Featured Projects",
        Some(WORK_SUBTITLE),
        width,
        config,
    );
    for (index, project) in PROJECTS.iter().enumerate() {
        lines.extend(project_card::card_lines(index, project, width, config));
    }

    let cta_row = lines.len();
    lines.push(Line::from(Span::styled(
        CTA,
        config.style("action_button_alt"),
    )));

    let total = lines.len();
    let offset = super::scroll_offset(state);
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((offset, 0)), inner);

    if cta_row >= offset as usize {
        let row = inner.y + (cta_row - offset as usize) as u16;
        if row < inner.bottom() {
            let cta = Rect {
                x: inner.x,
                y: row,
                width: CTA.len() as u16,
                height: 1,
            }
            .intersection(inner);
            hits.record_magnetic(
                cta,
                ClickAction::Navigate(Section::Contact),
                Target::ActionButton(Section::Contact),
            );
        }
    }

    total
}

//! The four content panels. Each builds its lines from [`crate::content`]
//! data, renders them through a scrolled paragraph, and reports its total
//! content height so the runtime can clamp scrolling.

pub mod about;
pub mod contact;
pub mod home;
pub mod work;

use ratatui::prelude::*;

use crate::{presentation::hits::HitMap, state::AppState, state::Section, tui::Frame};

pub const PANEL_MARGIN: u16 = 2;

/// Widest column panel copy is wrapped to; keeps prose readable on wide
/// terminals.
pub const PANEL_TEXT_WIDTH: u16 = 64;

pub(crate) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + PANEL_MARGIN,
        y: area.y,
        width: area.width.saturating_sub(PANEL_MARGIN * 2),
        height: area.height,
    }
}

pub(crate) fn text_width(inner: Rect) -> usize {
    inner.width.min(PANEL_TEXT_WIDTH) as usize
}

pub(crate) fn scroll_offset(state: &AppState) -> u16 {
    u16::try_from(state.view.scroll.offset()).unwrap_or(u16::MAX)
}

/// Render the active panel; returns its total content rows
pub fn view(state: &AppState, frame: &mut Frame<'_>, area: Rect, hits: &mut HitMap) -> usize {
    match state.view.section {
        Section::Home => home::view(state, frame, area, hits),
        Section::Work => work::view(state, frame, area, hits),
        Section::About => about::view(state, frame, area),
        Section::Contact => contact::view(state, frame, area),
    }
}

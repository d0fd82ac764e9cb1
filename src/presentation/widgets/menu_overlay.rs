use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Widget};
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::Config,
    state::{pointer::Target, PointerState, Section, ViewState},
};

const MENU_TITLE: &str = "Navigation";
const MENU_SUBTITLE: &str = "Where would you like to go?";

/// Rows from the top of the overlay block to the first menu item:
/// title, subtitle, and two blanks.
const HEADER_ROWS: u16 = 4;
/// Items are double-spaced.
const ITEM_STRIDE: u16 = 2;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub view: &'a ViewState,
    pub pointer: &'a PointerState,
    pub config: &'a Config,
}

/// Full-screen navigation overlay, drawn above everything else while the
/// menu is open. Items are one view unit applied per section.
#[derive(Clone)]
pub struct MenuOverlayWidget<'a> {
    ctx: ViewContext<'a>,
}

impl<'a> MenuOverlayWidget<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self { ctx }
    }

    fn label(section: Section) -> String {
        format!("{}  {:<7} →", section.number(), section.title())
    }

    fn label_width() -> u16 {
        Section::iter()
            .map(|s| Self::label(s).width() as u16)
            .max()
            .unwrap_or(0)
    }

    fn block_height() -> u16 {
        HEADER_ROWS + Section::iter().count() as u16 * ITEM_STRIDE
    }

    fn top(area: Rect) -> u16 {
        area.y + area.height.saturating_sub(Self::block_height()) / 2
    }

    fn left(area: Rect) -> u16 {
        area.x + area.width.saturating_sub(Self::label_width()) / 2
    }

    /// One region per section; shared by rendering and hit recording
    pub fn item_areas(area: Rect) -> Vec<(Section, Rect)> {
        let x = Self::left(area);
        let width = Self::label_width();
        let first = Self::top(area) + HEADER_ROWS;
        Section::iter()
            .enumerate()
            .map(|(i, section)| {
                let rect = Rect {
                    x,
                    y: first + i as u16 * ITEM_STRIDE,
                    width,
                    height: 1,
                }
                .intersection(area);
                (section, rect)
            })
            .collect()
    }
}

impl Widget for MenuOverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let config = &self.ctx.config;
        Clear.render(area, buf);
        Block::default()
            .style(config.style("overlay"))
            .render(area, buf);

        let top = Self::top(area);
        let title_x = area.x + area.width.saturating_sub(MENU_TITLE.width() as u16) / 2;
        if top < area.bottom() {
            buf.set_stringn(
                title_x,
                top,
                MENU_TITLE,
                area.width as usize,
                config.style("overlay_title"),
            );
        }
        let subtitle_x = area.x + area.width.saturating_sub(MENU_SUBTITLE.width() as u16) / 2;
        if top + 1 < area.bottom() {
            buf.set_stringn(
                subtitle_x,
                top + 1,
                MENU_SUBTITLE,
                area.width as usize,
                config.style("overlay_subtitle"),
            );
        }

        for (section, rect) in Self::item_areas(area) {
            if rect.width == 0 || rect.height == 0 {
                continue;
            }
            let offset = self.ctx.pointer.offset_for(Target::MenuItem(section));
            let rect = Rect {
                x: rect.x.saturating_add_signed(offset.0),
                y: rect.y.saturating_add_signed(offset.1),
                ..rect
            }
            .intersection(area);
            if rect.width == 0 {
                continue;
            }
            buf.set_stringn(
                rect.x,
                rect.y,
                section.number(),
                rect.width as usize,
                config.style("overlay_item_number"),
            );
            let text_x = rect.x + 4;
            if text_x < rect.right() {
                let style = if self.ctx.view.section == section {
                    config.style("overlay_item_active")
                } else {
                    config.style("overlay_item")
                };
                buf.set_stringn(
                    text_x,
                    rect.y,
                    format!("{:<7} →", section.title()),
                    (rect.right() - text_x) as usize,
                    style,
                );
            }
        }
    }
}

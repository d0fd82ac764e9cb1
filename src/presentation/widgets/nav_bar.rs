use ratatui::prelude::*;
use ratatui::widgets::{Block, Widget};
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

use crate::{
    config::Config,
    content,
    state::{pointer::Target, PointerState, Section, ViewState},
};

pub const MENU_CLOSED_ICON: &str = "☰";
pub const MENU_OPEN_ICON: &str = "✕";

const LINK_GAP: u16 = 2;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub view: &'a ViewState,
    pub pointer: &'a PointerState,
    pub config: &'a Config,
}

/// Top navigation bar: brand on the left, one link per section on the
/// right, menu toggle in the corner. Compacts its styling once the panel
/// is scrolled past the threshold.
#[derive(Clone)]
pub struct NavBarWidget<'a> {
    ctx: ViewContext<'a>,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self { ctx }
    }

    fn label(section: Section) -> String {
        format!("{} {}", section.number(), section.title())
    }

    fn brand_text() -> String {
        format!("{} ●", content::PROFILE.name)
    }

    fn content_row(area: Rect) -> u16 {
        area.y + area.height / 2
    }

    pub fn brand_area(area: Rect) -> Rect {
        Rect {
            x: area.x + 1,
            y: Self::content_row(area),
            width: Self::brand_text().width() as u16,
            height: 1,
        }
        .intersection(area)
    }

    pub fn toggle_area(area: Rect) -> Rect {
        Rect {
            x: area.right().saturating_sub(4),
            y: Self::content_row(area),
            width: 3,
            height: 1,
        }
        .intersection(area)
    }

    /// One region per section, laid out right-to-left before the toggle.
    /// The same geometry is used for rendering and for hit recording.
    pub fn link_areas(area: Rect) -> Vec<(Section, Rect)> {
        let toggle = Self::toggle_area(area);
        let y = Self::content_row(area);
        let total: u16 = Section::iter()
            .map(|s| Self::label(s).width() as u16 + LINK_GAP)
            .sum();
        let mut x = toggle.x.saturating_sub(total);
        Section::iter()
            .map(|section| {
                let width = Self::label(section).width() as u16;
                let rect = Rect {
                    x,
                    y,
                    width,
                    height: 1,
                }
                .intersection(area);
                x += width + LINK_GAP;
                (section, rect)
            })
            .collect()
    }

    fn drifted(rect: Rect, area: Rect, offset: (i16, i16)) -> Rect {
        Rect {
            x: rect.x.saturating_add_signed(offset.0),
            y: rect.y.saturating_add_signed(offset.1),
            ..rect
        }
        .intersection(area)
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let config = &self.ctx.config;
        let bar_style = if self.ctx.view.scroll.is_scrolled() {
            config.style("nav_bar_scrolled")
        } else {
            config.style("nav_bar")
        };
        Block::default().style(bar_style).render(area, buf);

        let brand = Self::drifted(
            Self::brand_area(area),
            area,
            self.ctx.pointer.offset_for(Target::Brand),
        );
        if brand.width > 0 {
            buf.set_stringn(
                brand.x,
                brand.y,
                Self::brand_text(),
                brand.width as usize,
                config.style("brand"),
            );
        }

        for (section, rect) in Self::link_areas(area) {
            let rect = Self::drifted(
                rect,
                area,
                self.ctx.pointer.offset_for(Target::NavLink(section)),
            );
            if rect.width == 0 {
                continue;
            }
            let style = if self.ctx.view.section == section {
                config.style("nav_link_active")
            } else {
                config.style("nav_link")
            };
            buf.set_stringn(
                rect.x,
                rect.y,
                section.number(),
                rect.width as usize,
                config.style("nav_number"),
            );
            let title_x = rect.x + 3;
            if title_x < rect.right() {
                buf.set_stringn(
                    title_x,
                    rect.y,
                    section.title(),
                    (rect.right() - title_x) as usize,
                    style,
                );
            }
        }

        let toggle = Self::drifted(
            Self::toggle_area(area),
            area,
            self.ctx.pointer.offset_for(Target::MenuToggle),
        );
        if toggle.width > 0 {
            let icon = if self.ctx.view.menu_open {
                MENU_OPEN_ICON
            } else {
                MENU_CLOSED_ICON
            };
            buf.set_stringn(
                toggle.x,
                toggle.y,
                format!(" {icon} "),
                toggle.width as usize,
                config.style("nav_link"),
            );
        }
    }
}

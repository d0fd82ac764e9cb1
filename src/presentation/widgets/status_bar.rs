use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::{
    config::Config,
    state::{SystemState, ViewState},
};

const KEY_HINTS: &str = "h/w/a/c panels · m menu · j/k scroll · q quit";

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub view: &'a ViewState,
    pub system: &'a SystemState,
    pub config: &'a Config,
}

/// Two-row bottom bar: where the visitor is, then either the transient
/// status message or the key hints.
#[derive(Clone)]
pub struct StatusBarWidget<'a> {
    ctx: ViewContext<'a>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(ctx: ViewContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn location(&self) -> String {
        let section = self.ctx.view.section;
        let mut location = format!("{} / {}", section.number(), section.title());
        if self.ctx.view.scroll.is_scrolled() {
            location.push_str(" · scrolled");
        }
        location
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);
        Clear.render(layout[0], buf);

        let config = &self.ctx.config;
        Paragraph::new(self.location())
            .style(config.style("status_bar"))
            .render(layout[0], buf);

        if area.height > 1 {
            Clear.render(layout[1], buf);
            let line = match &self.ctx.system.status_message {
                Some(message) => {
                    Paragraph::new(message.clone()).style(config.style("status_message"))
                }
                None => Paragraph::new(KEY_HINTS).style(config.style("status_bar")),
            };
            line.render(layout[1], buf);
        }
    }
}

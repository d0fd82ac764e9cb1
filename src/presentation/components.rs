//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! Rendering also re-records the hit map: every clickable or magnetic
//! region is published here so the runtime can translate mouse gestures.

pub mod sections;

use ratatui::prelude::*;

use crate::{
    presentation::hits::{ClickAction, HitMap},
    presentation::widgets::{menu_overlay, nav_bar, status_bar},
    presentation::widgets::{MenuOverlayWidget, NavBarWidget, StatusBarWidget},
    state::{pointer::Target, AppState, Section},
    tui::Frame,
};

/// Measurements the runtime feeds back into the state after a render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderMetrics {
    /// How far the active panel can scroll given its content and viewport
    pub max_scroll: usize,
}

/// Collection of all components
pub struct Components;

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual
    /// components and rebuilds the hit map from scratch.
    pub fn render(
        &mut self,
        frame: &mut Frame<'_>,
        state: &AppState,
        hits: &mut HitMap,
    ) -> RenderMetrics {
        hits.clear();

        let area = frame.area();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3), // Nav bar
                Constraint::Min(0),    // Active panel
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        let config = &state.config.config;

        let nav_ctx = nav_bar::ViewContext {
            view: &state.view,
            pointer: &state.pointer,
            config,
        };
        frame.render_widget(NavBarWidget::new(nav_ctx), layout[0]);
        hits.record_magnetic(
            NavBarWidget::brand_area(layout[0]),
            ClickAction::Navigate(Section::Home),
            Target::Brand,
        );
        for (section, rect) in NavBarWidget::link_areas(layout[0]) {
            hits.record_magnetic(rect, ClickAction::Navigate(section), Target::NavLink(section));
        }
        hits.record_magnetic(
            NavBarWidget::toggle_area(layout[0]),
            ClickAction::ToggleMenu,
            Target::MenuToggle,
        );

        let content_rows = sections::view(state, frame, layout[1], hits);
        let max_scroll = content_rows.saturating_sub(layout[1].height as usize);

        let status_ctx = status_bar::ViewContext {
            view: &state.view,
            system: &state.system,
            config,
        };
        frame.render_widget(StatusBarWidget::new(status_ctx), layout[2]);

        if state.view.menu_open {
            let overlay_ctx = menu_overlay::ViewContext {
                view: &state.view,
                pointer: &state.pointer,
                config,
            };
            frame.render_widget(MenuOverlayWidget::new(overlay_ctx), area);
            // The backdrop swallows everything underneath it
            hits.record(area, ClickAction::CloseMenu);
            for (section, rect) in MenuOverlayWidget::item_areas(area) {
                hits.record_magnetic(
                    rect,
                    ClickAction::Navigate(section),
                    Target::MenuItem(section),
                );
            }
            // The toggle floats above the overlay and still closes it
            hits.record_magnetic(
                NavBarWidget::toggle_area(layout[0]),
                ClickAction::ToggleMenu,
                Target::MenuToggle,
            );
        }

        RenderMetrics { max_scroll }
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{msg::Msg, update::update};

    fn render(state: &AppState) -> (HitMap, RenderMetrics, String) {
        let mut components = Components::new();
        let mut hits = HitMap::new();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let mut metrics = RenderMetrics::default();
        terminal
            .draw(|frame| {
                metrics = components.render(frame, state, &mut hits);
            })
            .expect("draw");
        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (hits, metrics, content)
    }

    #[test]
    fn test_initial_render_shows_home_panel() {
        let state = AppState::new();
        let (hits, _, content) = render(&state);
        assert!(content.contains("Tanuja"));
        assert!(content.contains("Full Stack"));
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_nav_links_resolve_clicks_to_their_sections() {
        let state = AppState::new();
        let (hits, _, _) = render(&state);
        let area = Rect::new(0, 0, 80, 3);
        for (section, rect) in NavBarWidget::link_areas(area) {
            assert_eq!(
                hits.action_at(rect.x + 1, rect.y),
                Some(ClickAction::Navigate(section))
            );
        }
    }

    #[test]
    fn test_open_menu_backdrop_closes_and_items_navigate() {
        let (state, _) = update(Msg::ToggleMenu, AppState::new());
        let (hits, _, content) = render(&state);
        assert!(content.contains("Where would you like to go?"));

        // Anywhere on the backdrop closes the menu
        assert_eq!(hits.action_at(2, 20), Some(ClickAction::CloseMenu));

        // Items themselves navigate
        let full = Rect::new(0, 0, 80, 24);
        for (section, rect) in MenuOverlayWidget::item_areas(full) {
            assert_eq!(
                hits.action_at(rect.x, rect.y),
                Some(ClickAction::Navigate(section))
            );
        }

        // The floating toggle stays clickable above the overlay
        let toggle = NavBarWidget::toggle_area(Rect::new(0, 0, 80, 3));
        assert_eq!(
            hits.action_at(toggle.x + 1, toggle.y),
            Some(ClickAction::ToggleMenu)
        );
    }

    #[test]
    fn test_metrics_expose_panel_overflow() {
        let (state, _) = update(Msg::Navigate(crate::state::Section::Work), AppState::new());
        let (_, metrics, _) = render(&state);
        // The work grid is taller than a 24-row terminal
        assert!(metrics.max_scroll > 0);
    }

    #[test]
    fn test_every_section_renders_without_panicking() {
        for section in [
            Section::Home,
            Section::Work,
            Section::About,
            Section::Contact,
        ] {
            let (state, _) = update(Msg::Navigate(section), AppState::new());
            let (_, _, content) = render(&state);
            assert!(!content.is_empty());
        }
    }
}

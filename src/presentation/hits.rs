//! Clickable and magnetic regions recorded at render time.
//!
//! Components re-record their interactive regions on every render; the
//! runtime hit-tests mouse events against the most recent map. Regions are
//! checked newest-first, so whatever was drawn on top wins.

use ratatui::layout::{Position, Rect};

use crate::state::{pointer::Target, Section};

/// What a left click on a region means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Navigate(Section),
    ToggleMenu,
    CloseMenu,
}

#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub area: Rect,
    pub action: ClickAction,
    pub magnet: Option<Target>,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<Region>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn record(&mut self, area: Rect, action: ClickAction) {
        self.regions.push(Region {
            area,
            action,
            magnet: None,
        });
    }

    pub fn record_magnetic(&mut self, area: Rect, action: ClickAction, magnet: Target) {
        self.regions.push(Region {
            area,
            action,
            magnet: Some(magnet),
        });
    }

    fn region_at(&self, column: u16, row: u16) -> Option<&Region> {
        let position = Position::new(column, row);
        self.regions.iter().rev().find(|r| r.area.contains(position))
    }

    /// Click action under the given cell, if any
    pub fn action_at(&self, column: u16, row: u16) -> Option<ClickAction> {
        self.region_at(column, row).map(|r| r.action)
    }

    /// Magnetic target under the given cell, with the pointer's displacement
    /// from the region's center
    pub fn magnet_at(&self, column: u16, row: u16) -> Option<(Target, i16, i16)> {
        let region = self.region_at(column, row)?;
        let target = region.magnet?;
        let center_x = (region.area.x + region.area.width / 2) as i16;
        let center_y = (region.area.y + region.area.height / 2) as i16;
        Some((target, column as i16 - center_x, row as i16 - center_y))
    }
}

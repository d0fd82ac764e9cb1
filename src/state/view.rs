//! Navigation state: which panel is visible, whether the overlay menu is
//! open, and how far the visible panel is scrolled.
//!
//! This module follows the Elm Architecture pattern:
//! - State is immutable and changes only through the `update` function
//! - All state transitions are explicitly defined as `Message` variants
//! - The module is self-contained and doesn't know about rendering

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Scroll offsets beyond this many rows set the `scrolled` flag consumers
/// use for compact styling.
pub const SCROLLED_THRESHOLD: usize = 50;

/// One of the four navigable content panels.
///
/// The set is closed: an out-of-range panel identifier is unrepresentable
/// here. The string boundary (config files) goes through `FromStr`, where
/// unknown names fail parse instead of reaching the state machine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Work,
    About,
    Contact,
}

impl Section {
    /// Human-readable panel title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Work => "Work",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Two-digit ordinal used by the nav bar and overlay menu ("01".."04")
    pub fn number(&self) -> &'static str {
        match self {
            Section::Home => "01",
            Section::Work => "02",
            Section::About => "03",
            Section::Contact => "04",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Messages that can be sent to update the view state
pub enum Message {
    /// A panel was selected (nav link, menu item, brand, or action button)
    SectionSelected(Section),
    /// The overlay menu toggle was activated
    MenuToggled,
    /// The overlay menu was dismissed
    MenuClosed,
    /// The panel was scrolled to an absolute offset
    ScrolledTo(usize),
    /// The panel was scrolled up one row
    ScrolledUp,
    /// The panel was scrolled down one row
    ScrolledDown,
    /// The panel was scrolled back to the top
    ScrolledToTop,
    /// The panel was scrolled to the end of its content
    ScrolledToBottom,
    /// The presentation layer measured how far the panel can scroll
    MaxScrollChanged(usize),
}

/// Scroll position of the visible panel.
///
/// The maximum offset is measured by the presentation layer after a render;
/// until then offsets are accepted unclamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    max_offset: Option<usize>,
}

impl ScrollState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Furthest offset the presentation layer has measured, if any
    pub fn max_offset(&self) -> Option<usize> {
        self.max_offset
    }

    /// Derived flag: the panel has been scrolled past the threshold
    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    fn clamp(&mut self) {
        if let Some(max) = self.max_offset {
            self.offset = self.offset.min(max);
        }
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.clamp();
    }

    fn reset(&mut self) {
        self.offset = 0;
        self.max_offset = None;
    }
}

/// The navigation controller: single source of truth for which panel is
/// shown and whether the overlay menu is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub section: Section,
    pub menu_open: bool,
    pub scroll: ScrollState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the view state based on a message
    ///
    /// This is the only way to modify the view state. All transitions are
    /// total: every message is valid in every state.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::SectionSelected(section) => {
                if self.section != section {
                    self.section = section;
                    self.scroll.reset();
                }
                // Selecting a section always dismisses the menu, even when
                // it is already closed or the section did not change.
                self.menu_open = false;
            }
            Message::MenuToggled => {
                self.menu_open = !self.menu_open;
            }
            Message::MenuClosed => {
                self.menu_open = false;
            }
            Message::ScrolledTo(offset) => {
                self.scroll.set(offset);
            }
            Message::ScrolledUp => {
                self.scroll.set(self.scroll.offset.saturating_sub(1));
            }
            Message::ScrolledDown => {
                self.scroll.set(self.scroll.offset.saturating_add(1));
            }
            Message::ScrolledToTop => {
                self.scroll.set(0);
            }
            Message::ScrolledToBottom => {
                self.scroll.set(self.scroll.max_offset.unwrap_or(self.scroll.offset));
            }
            Message::MaxScrollChanged(max) => {
                self.scroll.max_offset = Some(max);
                self.scroll.clamp();
            }
        }
    }
}

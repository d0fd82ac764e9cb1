use serde::{Deserialize, Serialize};
use strum::Display;

use crate::state::{pointer::Target, Section};

/// Top-level messages driving the state machine.
///
/// Keybindings in the config file deserialize directly into this enum, so
/// every user-bindable variant has a stable serialized form. Pointer and
/// presentation-feedback variants are produced by the runtime only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Msg {
    // Session control
    Quit,
    Suspend,
    Resume,
    Error(String),

    // Navigation commands
    Navigate(Section),
    ToggleMenu,
    CloseMenu,

    // Scrolling
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    ScrollTo(usize),

    // Decorative pointer follow
    MagnetShifted { target: Target, dx: i16, dy: i16 },
    MagnetReleased,

    // Presentation feedback
    ViewportMeasured { max_scroll: usize },
    StatusMessage(String),
}

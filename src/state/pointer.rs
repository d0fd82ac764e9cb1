//! Pointer-follow state for the decorative "magnetic" hover effect.
//!
//! Interactive elements advertise themselves as magnetic targets; when the
//! pointer moves across one, the element's label drifts toward the pointer
//! by the displacement stored here. The only contract is that the offset
//! returns to (0, 0) as soon as the pointer leaves.

use serde::{Deserialize, Serialize};

use super::view::Section;

/// Largest drift in either axis, in cells. Anything larger reads as layout
/// breakage on a character grid rather than decoration.
pub const MAX_SHIFT: i16 = 1;

/// An interactive element the pointer can engage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Brand,
    NavLink(Section),
    MenuToggle,
    MenuItem(Section),
    ActionButton(Section),
}

/// A currently engaged target and the pointer's displacement from its center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub target: Target,
    pub dx: i16,
    pub dy: i16,
}

/// Messages that can be sent to update the pointer state
pub enum Message {
    /// The pointer moved within a magnetic target
    Shifted { target: Target, dx: i16, dy: i16 },
    /// The pointer left whatever it was engaging
    Released,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    engagement: Option<Engagement>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engagement(&self) -> Option<Engagement> {
        self.engagement
    }

    pub fn is_engaged(&self) -> bool {
        self.engagement.is_some()
    }

    /// Current displacement; (0, 0) whenever nothing is engaged
    pub fn offset(&self) -> (i16, i16) {
        self.engagement.map_or((0, 0), |e| (e.dx, e.dy))
    }

    /// Displacement for a specific target; (0, 0) for every other target
    pub fn offset_for(&self, target: Target) -> (i16, i16) {
        match self.engagement {
            Some(e) if e.target == target => (e.dx, e.dy),
            _ => (0, 0),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Shifted { target, dx, dy } => {
                self.engagement = Some(Engagement {
                    target,
                    dx: dx.clamp(-MAX_SHIFT, MAX_SHIFT),
                    dy: dy.clamp(-MAX_SHIFT, MAX_SHIFT),
                });
            }
            Message::Released => {
                self.engagement = None;
            }
        }
    }
}

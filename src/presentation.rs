//! Presentation layer: stateless components and widgets that read the
//! application state and render it, plus the hit map they publish so the
//! runtime can translate mouse gestures into messages.

pub mod components;
pub mod hits;
pub mod widgets;

pub use components::{Components, RenderMetrics};
pub use hits::{ClickAction, HitMap};

//! Application state definitions
//!
//! The state is a composition of self-contained sub-states, each owning its
//! own `Message` enum and `update` method. The top-level [`crate::update()`]
//! function is the only place that routes messages into them.

pub mod pointer;
pub mod system;
pub mod view;

pub use pointer::PointerState;
pub use system::SystemState;
pub use view::{Section, ViewState};

use crate::config::Config;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: ViewState,
    pub pointer: PointerState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Self::default()
        }
    }
}

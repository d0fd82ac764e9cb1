//! # Foliotui - a portfolio site for the terminal
//!
//! A single-page personal portfolio rendered as a terminal user interface,
//! built with Rust and Ratatui. Four content panels (home, work, about,
//! contact) are swapped by a navigation controller; a full-screen overlay
//! menu, scroll-aware nav bar, and a decorative pointer-follow effect round
//! out the page.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): Immutable application state
//! - **Message** (`msg`): Events that can change the state
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects for the runtime to execute
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use foliotui::{state::AppState, state::Section, Msg, update};
//!
//! // Initialize state
//! let initial_state = AppState::new();
//! assert_eq!(initial_state.view.section, Section::Home);
//!
//! // Process messages
//! let (new_state, _commands) = update(Msg::Navigate(Section::Work), initial_state);
//!
//! // State is now updated: the work panel is shown and the menu is closed
//! assert_eq!(new_state.view.section, Section::Work);
//! assert!(!new_state.view.menu_open);
//! ```
//!
//! ## Key Features
//!
//! - **Predictable State Management**: All state changes go through the update function
//! - **Testable**: Pure functions make testing straightforward
//! - **Type Safety**: An out-of-range panel name is unrepresentable
//! - **Separation of Concerns**: Rendering reads state, never mutates it
//!
//! ## Modules
//!
//! - [`state`] - Application state definitions
//! - [`msg`] - Message types for state transitions
//! - [`update()`] - Pure update functions
//! - [`cmd`] - Command definitions for side effects
//! - [`presentation`] - UI components, widgets, and the hit map
//! - [`content`] - Static portfolio copy
//! - [`config`] - Configuration management

#![allow(dead_code)]

pub mod app;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod content;
pub mod msg;
pub mod presentation;
pub mod state;
pub mod text;
pub mod tui;
pub mod update;
pub mod utils;

// Re-exports for convenience
pub use cmd::Cmd;
pub use msg::Msg;
pub use state::AppState;
pub use update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Terminal input module (engine-facing).
//!
//! This module is independent of the engine. It maps `crossterm` key events
//! into [`crate::types::Intent`] and classifies pointer drags into headings.

pub mod gesture;
pub mod map;

pub use tui_snake_types as types;

pub use gesture::{direction_from_drag, DragTracker};
pub use map::{handle_key_event, should_quit};

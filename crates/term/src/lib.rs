//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a plain framebuffer of styled cells,
//! then flushes that framebuffer to the terminal with run-based diffs. There
//! are no widgets or layout engines here; the board is drawn cell by cell at
//! 2 columns per grid cell to keep squares roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

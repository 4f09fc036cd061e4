//! Drag gestures to headings.
//!
//! A drag is classified by its dominant axis: horizontal when the horizontal
//! travel is strictly larger, vertical otherwise. Positive `dy` points down,
//! matching grid coordinates.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, Intent};

/// Heading for a drag translation `(dx, dy)`.
///
/// Returns `None` for a drag with no travel at all.
pub fn direction_from_drag(dx: i32, dy: i32) -> Option<Direction> {
    if dx == 0 && dy == 0 {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

/// Turns terminal mouse drags into turn intents.
///
/// Press records the origin; release classifies the total translation.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<(u16, u16)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Intent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.origin.take()?;
                let dx = event.column as i32 - x0 as i32;
                // Terminal cells are about twice as tall as wide.
                let dy = (event.row as i32 - y0 as i32) * 2;
                direction_from_drag(dx, dy).map(Intent::Turn)
            }
            _ => None,
        }
    }
}

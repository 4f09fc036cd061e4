//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small pure helpers, making
//! them usable in any context (core logic, engine, rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed grid:
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 18 (indexed 0-17)
//! - **Initial snake**: `[(2, 2), (2, 1), (2, 0)]`, heading down
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Interval between simulation steps |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameState, Point, COLUMN_COUNT, ROW_COUNT};
//!
//! let head = Point::new(2, 2);
//! assert_eq!(head.shifted(Direction::Down), Point::new(2, 3));
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(GameState::NotStarted.button_label(), "Start Game");
//!
//! assert_eq!(COLUMN_COUNT, 10);
//! assert_eq!(ROW_COUNT, 18);
//! ```

use serde::{Deserialize, Serialize};

/// Grid width in cells (10 columns)
pub const COLUMN_COUNT: i32 = 10;

/// Grid height in cells (18 rows)
pub const ROW_COUNT: i32 = 18;

/// Number of cells on the grid
pub const CELL_COUNT: usize = (COLUMN_COUNT * ROW_COUNT) as usize;

/// Fixed interval between ticks in milliseconds
pub const TICK_MS: u32 = 500;

/// Snake body at the start of every game, head first
pub const INITIAL_BODY: [Point; 3] = [Point::new(2, 2), Point::new(2, 1), Point::new(2, 0)];

/// Heading at the start of every game and after a game over
pub const DEFAULT_DIRECTION: Direction = Direction::Down;

/// Rejection-sampling draws before food placement falls back to the free-cell list
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 64;

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that a head stepping off the grid is still
/// representable; [`in_bounds`] decides whether it is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `direction`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Point};
    ///
    /// let p = Point::new(4, 4);
    /// assert_eq!(p.shifted(Direction::Up), Point::new(4, 3));
    /// assert_eq!(p.shifted(Direction::Down), Point::new(4, 5));
    /// assert_eq!(p.shifted(Direction::Left), Point::new(3, 4));
    /// assert_eq!(p.shifted(Direction::Right), Point::new(5, 4));
    /// ```
    pub const fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Check whether a point lies on the grid.
pub const fn in_bounds(p: Point) -> bool {
    p.x >= 0 && p.y >= 0 && p.x < COLUMN_COUNT && p.y < ROW_COUNT
}

/// Heading of the snake.
///
/// Screen coordinates: `Up` decreases `y`, `Down` increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)` for this heading.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for exact 180° reversals.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Lifecycle of a game.
///
/// ```text
/// NotStarted --start--> Playing <--pause/resume--> Paused
///                          |
///                      collision
///                          v
///                      GameOver --start--> Playing
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    NotStarted,
    Playing,
    Paused,
    GameOver,
}

impl GameState {
    /// Label of the primary action button in this state.
    pub fn button_label(&self) -> &'static str {
        match self {
            GameState::NotStarted => "Start Game",
            GameState::Playing => "Pause",
            GameState::Paused => "Resume",
            GameState::GameOver => "Restart",
        }
    }

    /// Only a playing game advances on ticks or accepts turns.
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Playing)
    }
}

/// Player intent delivered by an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Request a new heading
    Turn(Direction),
    /// The contextual button: start, pause, resume or restart
    PrimaryAction,
    /// Hide the game-over report without changing state
    Dismiss,
}

impl Intent {
    /// Parse an intent from its string form
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Intent};
    ///
    /// assert_eq!(Intent::from_str("primary"), Some(Intent::PrimaryAction));
    /// assert_eq!(Intent::from_str("right"), Some(Intent::Turn(Direction::Right)));
    /// assert_eq!(Intent::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Some(Intent::PrimaryAction),
            "dismiss" => Some(Intent::Dismiss),
            other => Direction::from_str(other).map(Intent::Turn),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Turn(direction) => direction.as_str(),
            Intent::PrimaryAction => "primary",
            Intent::Dismiss => "dismiss",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grid_and_timing_defaults() {
        assert_eq!(COLUMN_COUNT, 10);
        assert_eq!(ROW_COUNT, 18);
        assert_eq!(CELL_COUNT, 180);
        assert_eq!(TICK_MS, 500);
        assert_eq!(DEFAULT_DIRECTION, Direction::Down);
        assert_eq!(INITIAL_BODY[0], Point::new(2, 2));
    }

    #[test]
    fn in_bounds_rejects_every_edge() {
        assert!(in_bounds(Point::ZERO));
        assert!(in_bounds(Point::new(COLUMN_COUNT - 1, ROW_COUNT - 1)));
        assert!(!in_bounds(Point::new(-1, 0)));
        assert!(!in_bounds(Point::new(0, -1)));
        assert!(!in_bounds(Point::new(COLUMN_COUNT, 0)));
        assert!(!in_bounds(Point::new(0, ROW_COUNT)));
    }

    #[test]
    fn opposite_pairs() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
            assert_eq!(d.opposite().opposite(), d);
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }

    #[test]
    fn button_labels() {
        assert_eq!(GameState::NotStarted.button_label(), "Start Game");
        assert_eq!(GameState::Playing.button_label(), "Pause");
        assert_eq!(GameState::Paused.button_label(), "Resume");
        assert_eq!(GameState::GameOver.button_label(), "Restart");
    }

    #[test]
    fn intent_string_forms_match() {
        for intent in [
            Intent::PrimaryAction,
            Intent::Dismiss,
            Intent::Turn(Direction::Up),
            Intent::Turn(Direction::Left),
        ] {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn serde_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        assert_eq!(
            serde_json::to_string(&GameState::GameOver).unwrap(),
            "\"game_over\""
        );
    }
}

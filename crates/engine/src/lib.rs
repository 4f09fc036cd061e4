//! Tick engine for the snake game.
//!
//! [`SnakeGame`] owns the snake, food, score, heading and lifecycle state and
//! is the only thing that mutates them. Everything time- or storage-related is
//! injected:
//!
//! - a [`Clock`] the engine arms on entering `Playing` and disarms on leaving it
//! - a [`HighScoreStore`](crate::store::HighScoreStore) written once per game over
//!
//! Render collaborators either pull [`SnakeGame::snapshot`] or register a
//! callback with [`SnakeGame::subscribe`].
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{ManualClock, SnakeGame, TickOutcome};
//! use tui_snake_engine::store::MemoryStore;
//! use tui_snake_engine::types::{GameState, Point};
//!
//! let mut game = SnakeGame::new(1, MemoryStore::new(), ManualClock::new());
//! game.primary_action();
//! assert_eq!(game.state(), GameState::Playing);
//!
//! game.set_food(Point::new(2, 3));
//! assert_eq!(game.tick(), TickOutcome::Ate);
//! assert_eq!(game.score(), 1);
//! ```

pub mod clock;
pub mod game;
pub mod tokio_clock;

pub use tui_snake_core as core;
pub use tui_snake_store as store;
pub use tui_snake_types as types;

pub use clock::{Clock, IntervalClock, ManualClock};
pub use game::{SnakeGame, SubscriptionId, TickOutcome};
pub use tokio_clock::{TickSignal, TokioClock};

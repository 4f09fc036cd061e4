//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake rules: body movement, collision checks, food
//! placement and the lifecycle transition table. It has **zero dependencies**
//! on timers, UI, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Every rule is a plain function or method
//! - **Portable**: Can run in any host (terminal, async service, headless test)
//!
//! # Module Structure
//!
//! - [`snake`]: Ordered body segments and step resolution
//! - [`food`]: Food placement that never lands on the snake
//! - [`lifecycle`]: Primary-action and collision transitions
//! - [`rng`]: Seeded LCG used for placement
//! - [`snapshot`]: Read-only view for render collaborators
//!
//! # Rules
//!
//! For a new head `H`, resolution runs in this order:
//!
//! 1. `H` is the food: grow at the head, score +1, relocate food
//! 2. `H` is off the grid or on the body (head excluded): game over
//! 3. Otherwise: move, dropping the tail
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{place_food, SimpleRng, Snake, Step};
//! use tui_snake_types::{Direction, Point};
//!
//! let mut snake = Snake::new();
//! let mut rng = SimpleRng::new(7);
//! let food = place_food(&mut rng, &snake).unwrap();
//! assert!(!snake.contains(food));
//!
//! let step = snake.step(Direction::Down, Point::new(2, 3));
//! assert_eq!(step, Step::Ate(Point::new(2, 3)));
//! assert_eq!(snake.len(), 4);
//! ```

pub mod food;
pub mod lifecycle;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::place_food;
pub use lifecycle::{on_collision, on_primary_action, ClockCommand, Transition};
pub use rng::SimpleRng;
pub use snake::{Collision, Snake, Step};
pub use snapshot::GameSnapshot;

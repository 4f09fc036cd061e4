use serde::Serialize;

use crate::types::{Direction, GameState, Point, DEFAULT_DIRECTION, INITIAL_BODY};

/// Read-only view of the game handed to render collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Head first.
    pub snake_body: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub high_score: u32,
    pub button_label: &'static str,
    pub game_over: bool,
    /// Whether the game-over report should be on screen.
    pub report_visible: bool,
    pub state: GameState,
    pub direction: Direction,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake_body.clear();
        self.snake_body.extend_from_slice(&INITIAL_BODY);
        self.food = Point::ZERO;
        self.score = 0;
        self.high_score = 0;
        self.state = GameState::NotStarted;
        self.button_label = self.state.button_label();
        self.game_over = false;
        self.report_visible = false;
        self.direction = DEFAULT_DIRECTION;
    }

    pub fn playable(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_snake(&self, p: Point) -> bool {
        self.snake_body.contains(&p)
    }

    pub fn head(&self) -> Option<Point> {
        self.snake_body.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            snake_body: Vec::with_capacity(INITIAL_BODY.len()),
            food: Point::ZERO,
            score: 0,
            high_score: 0,
            button_label: "",
            game_over: false,
            report_visible: false,
            state: GameState::NotStarted,
            direction: DEFAULT_DIRECTION,
        };
        s.clear();
        s
    }
}

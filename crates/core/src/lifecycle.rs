//! Lifecycle transitions driven by the primary action.
//!
//! The table is pure: it names the transition and what the host must do with
//! the tick clock. Applying the side effects is the engine's job.

use crate::types::GameState;

/// A legal transition out of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// NotStarted or GameOver -> Playing, with a fresh board
    Start,
    /// Playing -> Paused
    Pause,
    /// Paused -> Playing, board preserved
    Resume,
    /// Playing -> GameOver, after a collision
    End,
}

/// What the tick clock must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    Arm,
    Disarm,
}

impl Transition {
    pub fn target(self) -> GameState {
        match self {
            Transition::Start | Transition::Resume => GameState::Playing,
            Transition::Pause => GameState::Paused,
            Transition::End => GameState::GameOver,
        }
    }

    pub fn clock(self) -> ClockCommand {
        match self {
            Transition::Start | Transition::Resume => ClockCommand::Arm,
            Transition::Pause | Transition::End => ClockCommand::Disarm,
        }
    }

    /// Whether entering the target state wipes snake, food and score.
    pub fn resets_board(self) -> bool {
        matches!(self, Transition::Start)
    }
}

/// Transition taken when the primary action is pressed in `state`.
pub fn on_primary_action(state: GameState) -> Transition {
    match state {
        GameState::NotStarted | GameState::GameOver => Transition::Start,
        GameState::Playing => Transition::Pause,
        GameState::Paused => Transition::Resume,
    }
}

/// Transition taken when a collision is detected in `state`.
///
/// Collisions only count while playing.
pub fn on_collision(state: GameState) -> Option<Transition> {
    match state {
        GameState::Playing => Some(Transition::End),
        _ => None,
    }
}

//! Tick engine - owns the game aggregate and applies every mutation.
//!
//! All state changes go through `&mut self`, so a direction change or a
//! primary action always lands fully before or fully after a tick.

use crate::clock::Clock;
use crate::core::{
    on_collision, on_primary_action, place_food, ClockCommand, Collision, GameSnapshot,
    SimpleRng, Snake, Step, Transition,
};
use crate::store::HighScoreStore;
use crate::types::{in_bounds, Direction, GameState, Intent, Point, DEFAULT_DIRECTION};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed
    Idle,
    /// Plain move
    Moved,
    /// Food eaten, body grew, score +1
    Ate,
    /// Collision; the game is over
    GameOver(Collision),
}

/// Handle returned by [`SnakeGame::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameSnapshot)>;

/// The authoritative snake game.
///
/// `S` persists the best score, `C` is the host's tick clock.
pub struct SnakeGame<S, C> {
    snake: Snake,
    food: Point,
    score: u32,
    /// Last high score read from or written to the store.
    high_score: u32,
    direction: Direction,
    state: GameState,
    report_visible: bool,
    /// Monotonic game counter (increments on every start).
    episode_id: u32,
    rng: SimpleRng,
    store: S,
    clock: C,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: HighScoreStore, C: Clock> SnakeGame<S, C> {
    /// Create a game in `NotStarted` with the given food seed.
    pub fn new(seed: u32, store: S, clock: C) -> Self {
        let high_score = match store.read_high_score() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Could not read high score, starting from 0: {}", e);
                0
            }
        };

        Self {
            snake: Snake::new(),
            food: Point::ZERO,
            score: 0,
            high_score,
            direction: DEFAULT_DIRECTION,
            state: GameState::NotStarted,
            report_visible: false,
            episode_id: 0,
            rng: SimpleRng::new(seed),
            store,
            clock,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn button_label(&self) -> &'static str {
        self.state.button_label()
    }

    pub fn report_visible(&self) -> bool {
        self.report_visible
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Request a new heading.
    ///
    /// Ignored unless playing, and ignored for exact reversals.
    /// Returns whether the heading changed.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if !self.state.is_active() || requested.is_opposite(self.direction) {
            return false;
        }
        if requested == self.direction {
            return false;
        }

        self.direction = requested;
        self.emit();
        true
    }

    /// The contextual button: start, pause, resume or restart.
    pub fn primary_action(&mut self) -> Transition {
        let transition = on_primary_action(self.state);
        self.apply(transition);

        match transition {
            Transition::Start => log::info!(
                "Game {} started (high score {})",
                self.episode_id,
                self.high_score
            ),
            Transition::Pause => {
                log::info!("Game {} paused at score {}", self.episode_id, self.score)
            }
            Transition::Resume => log::info!("Game {} resumed", self.episode_id),
            Transition::End => {}
        }

        self.emit();
        transition
    }

    /// Hide the game-over report without leaving `GameOver`.
    pub fn dismiss_report(&mut self) -> bool {
        if !self.report_visible {
            return false;
        }
        self.report_visible = false;
        self.emit();
        true
    }

    /// Dispatch an input intent.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Turn(direction) => self.change_direction(direction),
            Intent::PrimaryAction => {
                self.primary_action();
                true
            }
            Intent::Dismiss => self.dismiss_report(),
        }
    }

    /// Advance one step. A no-op unless playing.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_active() {
            return TickOutcome::Idle;
        }

        let outcome = match self.snake.step(self.direction, self.food) {
            Step::Ate(head) => {
                self.relocate_food();
                self.score += 1;
                log::debug!(
                    "Ate food at ({}, {}), score {}, length {}",
                    head.x,
                    head.y,
                    self.score,
                    self.snake.len()
                );
                TickOutcome::Ate
            }
            Step::Moved(_) => TickOutcome::Moved,
            Step::Collided(collision) => {
                self.end_game(collision);
                TickOutcome::GameOver(collision)
            }
        };

        self.emit();
        outcome
    }

    /// Place food at a chosen cell instead of a random one.
    ///
    /// Rejected when the cell is off the grid or under the snake.
    pub fn set_food(&mut self, p: Point) -> bool {
        if !in_bounds(p) || self.snake.contains(p) {
            return false;
        }
        self.food = p;
        self.emit();
        true
    }

    /// Replace the snake, e.g. to resume a scripted position.
    ///
    /// Rejected when a segment is off the grid, sits on the food, or
    /// overlaps another segment.
    pub fn set_snake(&mut self, snake: Snake) -> bool {
        if snake.overlaps_itself() || snake.segments().any(|p| !in_bounds(p) || p == self.food) {
            return false;
        }
        self.snake = snake;
        self.emit();
        true
    }

    /// Register a callback invoked with a fresh snapshot after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameSnapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake_body.clear();
        out.snake_body.extend(self.snake.segments());
        out.food = self.food;
        out.score = self.score;
        out.high_score = self.high_score;
        out.button_label = self.state.button_label();
        out.game_over = self.state == GameState::GameOver;
        out.report_visible = self.report_visible;
        out.state = self.state;
        out.direction = self.direction;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn apply(&mut self, transition: Transition) {
        if transition.resets_board() {
            self.reset_board();
        }

        self.state = transition.target();

        match transition.clock() {
            ClockCommand::Arm => self.clock.arm(),
            ClockCommand::Disarm => self.clock.disarm(),
        }
    }

    fn reset_board(&mut self) {
        self.snake.reset();
        self.relocate_food();
        self.score = 0;
        self.report_visible = false;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    fn relocate_food(&mut self) {
        match place_food(&mut self.rng, &self.snake) {
            Some(p) => self.food = p,
            None => log::warn!("No free cell left for food; keeping it at {:?}", self.food),
        }
    }

    fn end_game(&mut self, collision: Collision) {
        let Some(transition) = on_collision(self.state) else {
            return;
        };

        self.apply(transition);
        self.direction = DEFAULT_DIRECTION;
        self.report_visible = true;
        self.persist_high_score();

        log::info!(
            "Game {} over ({:?}) with score {}, high score {}",
            self.episode_id,
            collision,
            self.score,
            self.high_score
        );
    }

    /// Write `max(score, stored)` once. Store failures are only logged.
    fn persist_high_score(&mut self) {
        let stored = match self.store.read_high_score() {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Could not read high score, using cached value: {}", e);
                self.high_score
            }
        };

        let best = self.score.max(stored);
        if let Err(e) = self.store.write_high_score(best) {
            log::warn!("Could not save high score {}: {}", best, e);
        }
        self.high_score = best;
    }

    fn emit(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::{MemoryStore, StoreError};
    use std::cell::RefCell;
    use std::rc::Rc;

    type TestGame = SnakeGame<MemoryStore, ManualClock>;

    fn new_game() -> TestGame {
        SnakeGame::new(12345, MemoryStore::new(), ManualClock::new())
    }

    fn started() -> TestGame {
        let mut game = new_game();
        game.primary_action();
        game
    }

    fn body(game: &TestGame) -> Vec<Point> {
        game.snake().segments().collect()
    }

    /// Keep the food away from the snake's path.
    fn park_food(game: &mut TestGame) {
        assert!(game.set_food(Point::new(9, 17)));
    }

    struct FailingStore;

    impl HighScoreStore for FailingStore {
        fn read_high_score(&self) -> Result<u32, StoreError> {
            Err(StoreError::Unavailable("read".to_string()))
        }

        fn write_high_score(&mut self, _value: u32) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("write".to_string()))
        }
    }

    #[test]
    fn test_new_game_state() {
        let game = new_game();
        assert_eq!(game.state(), GameState::NotStarted);
        assert_eq!(game.score(), 0);
        assert_eq!(game.direction(), Direction::Down);
        assert_eq!(game.food(), Point::ZERO);
        assert_eq!(game.button_label(), "Start Game");
        assert!(!game.clock().is_armed());
    }

    #[test]
    fn test_start_arms_clock_and_places_food() {
        let game = started();
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.clock().is_armed());
        assert_eq!(game.episode_id(), 1);
        assert!(!game.snake().contains(game.food()));
        assert_eq!(game.snake().len(), 3);
    }

    #[test]
    fn test_tick_is_noop_unless_playing() {
        let mut game = new_game();
        let before = game.snapshot();
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.snapshot(), before);

        game.primary_action();
        game.primary_action();
        assert_eq!(game.state(), GameState::Paused);
        let paused = game.snapshot();
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.snapshot(), paused);
    }

    #[test]
    fn test_plain_tick_moves_down() {
        let mut game = started();
        park_food(&mut game);

        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(
            body(&game),
            vec![Point::new(2, 3), Point::new(2, 2), Point::new(2, 1)]
        );
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = started();
        assert!(game.set_food(Point::new(2, 3)));

        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(
            body(&game),
            vec![
                Point::new(2, 3),
                Point::new(2, 2),
                Point::new(2, 1),
                Point::new(2, 0)
            ]
        );
        assert_eq!(game.score(), 1);
        assert_ne!(game.food(), Point::new(2, 3));
        assert!(!game.snake().contains(game.food()));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut game = started();
        assert!(!game.change_direction(Direction::Up));
        assert_eq!(game.direction(), Direction::Down);

        assert!(game.change_direction(Direction::Left));
        assert!(!game.change_direction(Direction::Right));
        assert_eq!(game.direction(), Direction::Left);
    }

    #[test]
    fn test_turns_ignored_when_not_playing() {
        let mut game = new_game();
        assert!(!game.change_direction(Direction::Left));
        assert_eq!(game.direction(), Direction::Down);

        game.primary_action();
        game.primary_action();
        assert!(!game.change_direction(Direction::Left));
        assert_eq!(game.direction(), Direction::Down);
    }

    #[test]
    fn test_pause_resume_preserves_board() {
        let mut game = started();
        park_food(&mut game);
        game.tick();
        let mid = game.snapshot();

        assert_eq!(game.primary_action(), Transition::Pause);
        assert!(!game.clock().is_armed());
        assert_eq!(game.button_label(), "Resume");

        assert_eq!(game.primary_action(), Transition::Resume);
        assert!(game.clock().is_armed());
        assert_eq!(game.snapshot().snake_body, mid.snake_body);
        assert_eq!(game.score(), mid.score);
        assert_eq!(game.episode_id(), 1);
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut game = started();
        park_food(&mut game);
        assert!(game.change_direction(Direction::Left));

        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.tick(), TickOutcome::GameOver(Collision::Wall));

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.direction(), Direction::Down);
        assert!(!game.clock().is_armed());
        assert!(game.report_visible());
        assert_eq!(game.button_label(), "Restart");
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut game = started();
        park_food(&mut game);
        let looped = Snake::from_segments([
            Point::new(4, 4),
            Point::new(5, 4),
            Point::new(5, 5),
            Point::new(4, 5),
            Point::new(3, 5),
        ])
        .unwrap();
        assert!(game.set_snake(looped));

        assert_eq!(game.tick(), TickOutcome::GameOver(Collision::SelfHit));
        assert_eq!(game.state(), GameState::GameOver);
    }

    #[test]
    fn test_set_snake_rejects_repeated_segments() {
        let mut game = started();
        park_food(&mut game);
        let before = body(&game);

        let doubled = Snake::from_segments([
            Point::new(4, 4),
            Point::new(4, 5),
            Point::new(4, 4),
        ])
        .unwrap();
        assert!(!game.set_snake(doubled));
        assert_eq!(body(&game), before);

        let off_grid = Snake::from_segments([Point::new(0, 0), Point::new(-1, 0)]).unwrap();
        assert!(!game.set_snake(off_grid));
        assert_eq!(body(&game), before);
    }

    #[test]
    fn test_game_over_persists_max_score() {
        let mut game = SnakeGame::new(7, MemoryStore::with_value(5), ManualClock::new());
        assert_eq!(game.high_score(), 5);
        game.primary_action();

        // Eat three times straight down, then run into the bottom wall.
        for y in 3..6 {
            assert!(game.set_food(Point::new(2, y)));
            assert_eq!(game.tick(), TickOutcome::Ate);
        }
        assert!(game.set_food(Point::new(9, 0)));
        while game.tick() != TickOutcome::GameOver(Collision::Wall) {}

        assert_eq!(game.score(), 3);
        assert_eq!(game.high_score(), 5);
        assert_eq!(game.store().value(), 5);
    }

    #[test]
    fn test_game_over_raises_high_score() {
        let mut game = SnakeGame::new(7, MemoryStore::with_value(1), ManualClock::new());
        game.primary_action();
        for y in 3..6 {
            assert!(game.set_food(Point::new(2, y)));
            game.tick();
        }
        assert!(game.set_food(Point::new(9, 0)));
        while game.state() == GameState::Playing {
            game.tick();
        }

        assert_eq!(game.high_score(), 3);
        assert_eq!(game.store().value(), 3);
    }

    #[test]
    fn test_restart_resets_score_and_body() {
        let mut game = started();
        assert!(game.set_food(Point::new(2, 3)));
        game.tick();
        assert_eq!(game.score(), 1);
        park_food(&mut game);
        while game.state() == GameState::Playing {
            game.tick();
        }

        assert_eq!(game.primary_action(), Transition::Start);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake(), &Snake::new());
        assert!(!game.report_visible());
        assert_eq!(game.episode_id(), 2);
        assert!(game.clock().is_armed());
        assert_eq!(game.high_score(), 1);
    }

    #[test]
    fn test_store_failure_does_not_block_game_over() {
        let mut game = SnakeGame::new(3, FailingStore, ManualClock::new());
        assert_eq!(game.high_score(), 0);
        game.primary_action();
        assert!(game.set_food(Point::new(2, 3)));
        game.tick();
        assert!(game.set_food(Point::new(9, 17)));
        while game.state() == GameState::Playing {
            game.tick();
        }

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.high_score(), 1);

        game.primary_action();
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_dismiss_report() {
        let mut game = started();
        assert!(!game.dismiss_report());
        while game.state() == GameState::Playing {
            game.tick();
        }
        assert!(game.dismiss_report());
        assert!(!game.report_visible());
        assert_eq!(game.state(), GameState::GameOver);
    }

    #[test]
    fn test_apply_intent_dispatch() {
        let mut game = new_game();
        assert!(game.apply_intent(Intent::PrimaryAction));
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.apply_intent(Intent::Turn(Direction::Right)));
        assert_eq!(game.direction(), Direction::Right);
        assert!(!game.apply_intent(Intent::Dismiss));
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let mut game = new_game();
        let seen: Rc<RefCell<Vec<GameSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = game.subscribe(move |snap| sink.borrow_mut().push(snap.clone()));

        game.primary_action();
        game.tick();
        game.change_direction(Direction::Up);
        game.change_direction(Direction::Left);

        {
            let seen = seen.borrow();
            assert_eq!(seen.len(), 3);
            assert_eq!(seen[0].state, GameState::Playing);
            assert_eq!(seen[0].button_label, "Pause");
            assert_eq!(seen[2].direction, Direction::Left);
        }

        assert!(game.unsubscribe(id));
        game.tick();
        assert_eq!(seen.borrow().len(), 3);
        assert!(!game.unsubscribe(id));
    }

    #[test]
    fn test_snapshot_reflects_game_over() {
        let mut game = started();
        while game.state() == GameState::Playing {
            game.tick();
        }
        let snap = game.snapshot();
        assert!(snap.game_over);
        assert!(snap.report_visible);
        assert_eq!(snap.button_label, "Restart");
        assert_eq!(snap.high_score, game.high_score());
    }

    #[test]
    fn test_set_food_rejects_snake_and_off_grid() {
        let mut game = started();
        assert!(!game.set_food(Point::new(2, 1)));
        assert!(!game.set_food(Point::new(-1, 0)));
        assert!(!game.set_food(Point::new(0, 18)));
        assert!(game.set_food(Point::new(0, 17)));
    }
}

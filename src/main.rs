//! Terminal snake runner (default binary).
//!
//! Polls crossterm for input with a timeout that ends at the next tick, and
//! redraws through the framebuffer renderer only after something changed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameSnapshot;
use tui_snake::engine::{IntervalClock, SnakeGame, TickOutcome};
use tui_snake::input::{handle_key_event, should_quit, DragTracker};
use tui_snake::store::HighScoreStore;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::TICK_MS;
use tui_snake::{logging, AppConfig};

/// Input poll bound while no ticks are scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

type Game = SnakeGame<Box<dyn HighScoreStore>, IntervalClock>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    log::debug!("Starting with seed {}", config.seed);

    let store = config.open_store();
    let mut game = SnakeGame::new(config.seed, store, IntervalClock::from_millis(TICK_MS));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    log::info!(
        "Exiting after {} game(s), high score {}",
        game.episode_id(),
        game.high_score()
    );
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut drag = DragTracker::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = game.clock().timeout(Instant::now()).unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        dirty |= game.apply_intent(intent);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(intent) = drag.handle_mouse_event(mouse) {
                        dirty |= game.apply_intent(intent);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if game.clock_mut().poll_due(Instant::now()) && game.tick() != TickOutcome::Idle {
            dirty = true;
        }
    }
}

//! High score persistence across game instances.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tui_snake::engine::{ManualClock, SnakeGame};
use tui_snake::store::{HighScoreStore, JsonFileStore, StoreError};
use tui_snake::types::{Direction, GameState, Point};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn scratch_file(name: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir()
        .join(format!("tui-snake-it-{}-{}", std::process::id(), n))
        .join(name)
}

/// Start a game, eat `meals` foods straight down, then crash into the left wall.
fn play_once<S: HighScoreStore>(game: &mut SnakeGame<S, ManualClock>, meals: i32) {
    game.primary_action();
    for y in 3..3 + meals {
        assert!(game.set_food(Point::new(2, y)));
        game.tick();
    }
    assert!(game.set_food(Point::new(9, 17)));
    assert!(game.change_direction(Direction::Left));
    for _ in 0..3 {
        game.tick();
    }
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.score(), meals as u32);
}

#[test]
fn test_high_score_survives_restart_of_the_program() {
    let path = scratch_file("high-score.json");

    let mut first = SnakeGame::new(1, JsonFileStore::new(&path), ManualClock::new());
    assert_eq!(first.high_score(), 0);
    play_once(&mut first, 2);
    assert_eq!(first.high_score(), 2);
    drop(first);

    let raw = fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["high_score"], 2);

    let mut second = SnakeGame::new(2, JsonFileStore::new(&path), ManualClock::new());
    assert_eq!(second.high_score(), 2);
    play_once(&mut second, 1);
    assert_eq!(second.high_score(), 2);
    assert_eq!(JsonFileStore::new(&path).read_high_score().unwrap(), 2);

    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn test_corrupt_file_does_not_block_game_over() {
    let path = scratch_file("high-score.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(
        store.read_high_score(),
        Err(StoreError::Malformed { .. })
    ));

    let mut game = SnakeGame::new(3, store, ManualClock::new());
    assert_eq!(game.high_score(), 0);
    play_once(&mut game, 1);
    assert_eq!(game.high_score(), 1);

    // The write replaced the corrupt document.
    assert_eq!(JsonFileStore::new(&path).read_high_score().unwrap(), 1);

    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

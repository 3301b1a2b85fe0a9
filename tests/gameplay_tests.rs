//! Integration tests for the rules engine, input mapping and saved games

use std::collections::HashSet;
use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_snake::core::{Collision, GameState, Phase};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::{clear_game, load_game, save_game, FileStore, MemoryStore, Store};
use tui_snake::types::{Direction, GameAction, Position, SAVE_KEY, TILE_COUNT};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_scenario_eat_at_start() {
    let mut state = GameState::from_parts(
        [Position::new(10, 10)],
        Position::new(11, 10),
        Direction::Right,
        0,
        TILE_COUNT,
        3,
    )
    .unwrap();

    let outcome = state.tick();

    assert!(outcome.ate);
    assert_eq!(outcome.collision, None);
    assert_eq!(state.score(), 10);
    assert_eq!(
        state.snake().iter().copied().collect::<Vec<_>>(),
        vec![Position::new(11, 10), Position::new(10, 10)]
    );
    assert!(!state.snake().contains(&state.food()));
    assert!(state.food().in_bounds(TILE_COUNT));
}

#[test]
fn test_scenario_left_wall() {
    let mut state = GameState::from_parts(
        [Position::new(0, 0)],
        Position::new(5, 5),
        Direction::Left,
        20,
        TILE_COUNT,
        3,
    )
    .unwrap();

    let outcome = state.tick();

    assert_eq!(outcome.collision, Some(Collision::Wall));
    assert_eq!(state.phase(), Phase::GameOver(Collision::Wall));
    assert_eq!(state.head(), Position::new(-1, 0));
    assert_eq!(state.score(), 20);
}

#[test]
fn test_keys_drive_a_game() {
    let mut state = GameState::new(11);

    for code in [KeyCode::Char('d'), KeyCode::Char('a')] {
        let action = handle_key_event(key(code)).unwrap();
        state.apply_action(action);
    }
    // 'a' reversed 'd' and was rejected.
    assert_eq!(state.direction(), Direction::Right);

    state.tick();
    assert_eq!(state.head(), Position::new(11, 10));

    let up = handle_key_event(key(KeyCode::Up)).unwrap();
    assert_eq!(up, GameAction::Turn(Direction::Up));
    assert!(state.apply_action(up));
    state.tick();
    assert_eq!(state.head(), Position::new(11, 9));

    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(!should_quit(key(KeyCode::Char(' '))));
}

#[test]
fn test_long_run_keeps_invariants() {
    let mut state = GameState::new(2024);
    let turns = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
    let mut step = 0usize;

    while state.is_running() && step < 2_000 {
        // Sweep in shrinking squares so the snake meets food and walls.
        if step % 7 == 0 {
            state.steer(turns[(step / 7) % turns.len()]);
        }
        let before = state.len();
        let outcome = state.tick();
        step += 1;

        if outcome.collision.is_some() {
            break;
        }
        let expected = if outcome.ate { before + 1 } else { before };
        assert_eq!(state.len(), expected);

        let unique: HashSet<_> = state.snake().iter().collect();
        assert_eq!(unique.len(), state.len());
        assert!(state.snake().iter().all(|p| p.in_bounds(TILE_COUNT)));
        assert!(!state.snake().contains(&state.food()));
        assert_eq!(state.score() as usize, (state.len() - 1) * 10);
    }
}

#[test]
fn test_save_load_round_trip_through_files() {
    let dir = std::env::temp_dir().join(format!("tui-snake-it-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let mut store = FileStore::new(&dir);

    let state = GameState::from_parts(
        [Position::new(4, 4), Position::new(4, 5), Position::new(4, 6)],
        Position::new(9, 1),
        Direction::Up,
        20,
        TILE_COUNT,
        5,
    )
    .unwrap();
    save_game(&mut store, SAVE_KEY, &state).unwrap();
    assert!(dir.join(format!("{SAVE_KEY}.json")).exists());

    let restored = load_game(&store, SAVE_KEY, TILE_COUNT, 5).unwrap().unwrap();
    assert_eq!(restored.snake(), state.snake());
    assert_eq!(restored.food(), state.food());
    assert_eq!(restored.score(), 20);
    assert_eq!(restored.direction(), Direction::Up);

    clear_game(&mut store, SAVE_KEY).unwrap();
    assert!(load_game(&store, SAVE_KEY, TILE_COUNT, 5).unwrap().is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_malformed_record_is_reported() {
    let store = MemoryStore::new().with_entry(SAVE_KEY, r#"{"snake":"nope"}"#);
    let err = match load_game(&store, SAVE_KEY, TILE_COUNT, 1) {
        Err(err) => err,
        Ok(_) => panic!("malformed record accepted"),
    };
    assert!(err.is_malformed());
    assert_eq!(store.get(SAVE_KEY).unwrap().as_deref(), Some(r#"{"snake":"nope"}"#));
}

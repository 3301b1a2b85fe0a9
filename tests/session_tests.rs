//! Session tests: timers, cues and persistence driven by a fake clock.

use std::io;

use tui_snake::core::{AudioSink, Collision, Phase, RenderSurface, TextSize};
use tui_snake::engine::{Session, SessionConfig, StartKind};
use tui_snake::store::{MemoryStore, PersistError, Store};
use tui_snake::types::{Cue, Direction, GameAction, Position, Rgb, SAVE_KEY};

#[derive(Default)]
struct Canvas {
    texts: Vec<String>,
    shaded: bool,
    status: Option<(u32, bool)>,
    frames: usize,
}

impl RenderSurface for Canvas {
    fn size_px(&self) -> (u32, u32) {
        (400, 400)
    }

    fn clear(&mut self, _color: Rgb) {
        self.frames += 1;
        self.texts.clear();
        self.shaded = false;
    }

    fn fill_cell(&mut self, _cell: Position, _color: Rgb) {}

    fn draw_text_centered(&mut self, _x: u32, _y: u32, text: &str, _size: TextSize) {
        self.texts.push(text.to_string());
    }

    fn shade(&mut self) {
        self.shaded = true;
    }

    fn show_status(&mut self, score: u32, muted: bool) {
        self.status = Some((score, muted));
    }
}

#[derive(Default)]
struct Speaker {
    cues: Vec<Cue>,
}

impl AudioSink for Speaker {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}

/// A store whose disk is gone: every call fails with an I/O error.
#[derive(Default)]
struct BrokenStore {
    writes: usize,
    removes: usize,
}

fn io_failure(key: &str) -> PersistError {
    PersistError::Io {
        key: key.to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
    }
}

impl Store for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Err(io_failure(key))
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), PersistError> {
        self.writes += 1;
        Err(io_failure(key))
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.removes += 1;
        Err(io_failure(key))
    }
}

type TestSession = Session<Canvas, Speaker, MemoryStore>;

fn start_with(store: MemoryStore) -> TestSession {
    Session::start(
        SessionConfig::default(),
        Canvas::default(),
        Speaker::default(),
        store,
        0,
    )
}

fn record(json: &str) -> MemoryStore {
    MemoryStore::new().with_entry(SAVE_KEY, json)
}

/// Head at (10,10) moving right with food directly ahead.
const ABOUT_TO_EAT: &str =
    r#"{"snake":[{"x":10,"y":10}],"food":{"x":11,"y":10},"score":0,"dx":1,"dy":0}"#;

/// Head on the right edge moving right.
const ABOUT_TO_CRASH: &str =
    r#"{"snake":[{"x":19,"y":5}],"food":{"x":0,"y":0},"score":30,"dx":1,"dy":0}"#;

#[test]
fn test_fresh_start_without_record() {
    let session = start_with(MemoryStore::new());

    assert_eq!(session.start_kind(), StartKind::Fresh);
    assert_eq!(session.state().snake().len(), 1);
    assert_eq!(session.state().head(), Position::new(10, 10));
    assert_eq!(session.state().direction(), Direction::Still);
    assert!(session.is_ticking());
    assert_eq!(session.surface().frames, 1);
    assert_eq!(session.surface().status, Some((0, false)));
}

#[test]
fn test_resume_restores_record_and_shows_score() {
    let session = start_with(record(ABOUT_TO_CRASH));

    assert_eq!(session.start_kind(), StartKind::Resumed);
    assert_eq!(session.state().head(), Position::new(19, 5));
    assert_eq!(session.state().food(), Position::new(0, 0));
    assert_eq!(session.state().score(), 30);
    assert_eq!(session.state().direction(), Direction::Right);
    assert_eq!(session.surface().status, Some((30, false)));
}

#[test]
fn test_malformed_records_start_fresh() {
    for bad in [
        "not json",
        r#"{"snake":[],"food":{"x":1,"y":1},"score":0,"dx":0,"dy":0}"#,
        r#"{"snake":[{"x":40,"y":1}],"food":{"x":1,"y":1},"score":0,"dx":0,"dy":0}"#,
        r#"{"snake":[{"x":1,"y":1}],"food":{"x":2,"y":2},"score":0,"dx":1,"dy":1}"#,
    ] {
        let session = start_with(record(bad));
        assert_eq!(session.start_kind(), StartKind::Recovered, "{bad}");
        assert!(session.state().is_running());
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.state().head(), Position::new(10, 10));
    }
}

#[test]
fn test_tick_fires_on_cadence() {
    let mut session = start_with(MemoryStore::new());
    assert!(session.handle_action(GameAction::Turn(Direction::Right), 0));

    session.update(99);
    assert_eq!(session.state().head(), Position::new(10, 10));

    session.update(100);
    assert_eq!(session.state().head(), Position::new(11, 10));

    // Re-armed relative to the tick that just ran.
    session.update(150);
    assert_eq!(session.state().head(), Position::new(11, 10));
    session.update(200);
    assert_eq!(session.state().head(), Position::new(12, 10));
}

#[test]
fn test_next_deadline_is_nearest_timer() {
    let session = start_with(MemoryStore::new());
    assert_eq!(session.next_deadline_ms(0), 100);
    assert_eq!(session.next_deadline_ms(40), 60);
}

#[test]
fn test_eating_plays_cue_and_updates_status() {
    let mut session = start_with(record(ABOUT_TO_EAT));
    session.update(100);

    assert_eq!(session.state().score(), 10);
    assert_eq!(session.state().len(), 2);
    assert_eq!(session.audio().cues, vec![Cue::Eat]);
    assert_eq!(session.surface().status, Some((10, false)));
}

#[test]
fn test_mute_suppresses_cues() {
    let mut session = start_with(record(ABOUT_TO_EAT));
    assert!(session.handle_action(GameAction::ToggleMute, 0));
    assert!(session.is_muted());
    assert_eq!(session.surface().status, Some((0, true)));

    session.update(100);
    assert_eq!(session.state().score(), 10);
    assert!(session.audio().cues.is_empty());
}

#[test]
fn test_game_over_stops_ticks_and_clears_record() {
    let mut session = start_with(record(ABOUT_TO_CRASH));
    session.update(100);

    assert_eq!(session.state().phase(), Phase::GameOver(Collision::Wall));
    assert!(!session.is_ticking());
    assert_eq!(session.audio().cues, vec![Cue::GameOver]);
    assert!(!session.store().contains(SAVE_KEY));

    let canvas = session.surface();
    assert!(canvas.shaded);
    assert_eq!(
        canvas.texts,
        vec!["Game Over!", "Score: 30", "Press Space to Restart"]
    );

    // No further ticks and no saves of the dead game.
    session.update(5_000);
    assert_eq!(session.state().score(), 30);
    assert!(!session.store().contains(SAVE_KEY));
}

#[test]
fn test_restart_only_after_game_over() {
    let mut session = start_with(record(ABOUT_TO_CRASH));
    assert!(!session.handle_action(GameAction::Restart, 0));
    assert_eq!(session.state().score(), 30);

    session.update(100);
    assert!(!session.state().is_running());

    assert!(session.handle_action(GameAction::Restart, 150));
    assert!(session.state().is_running());
    assert!(session.is_ticking());
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.state().snake().len(), 1);
    assert_eq!(session.surface().status, Some((0, false)));
    assert!(session.surface().texts.is_empty());
    assert_eq!(session.next_deadline_ms(150), 100);
}

#[test]
fn test_turns_ignored_while_game_over() {
    let mut session = start_with(record(ABOUT_TO_CRASH));
    session.update(100);
    assert!(!session.handle_action(GameAction::Turn(Direction::Up), 110));
}

#[test]
fn test_autosave_every_interval_while_running() {
    let mut session = start_with(MemoryStore::new());

    session.update(999);
    assert!(!session.store().contains(SAVE_KEY));

    session.update(1000);
    let saved = session.store().get(SAVE_KEY).unwrap().unwrap();
    assert_eq!(
        saved,
        format!(
            r#"{{"snake":[{{"x":10,"y":10}}],"food":{{"x":{},"y":{}}},"score":0,"dx":0,"dy":0}}"#,
            session.state().food().x,
            session.state().food().y
        )
    );
}

#[test]
fn test_flush_saves_running_game() {
    let mut session = start_with(record(ABOUT_TO_EAT));
    session.update(100);
    session.flush();

    let saved = session.store().get(SAVE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["score"], 10);
    assert_eq!(json["snake"][0]["x"], 11);
    assert_eq!(json["dx"], 1);
    assert_eq!(json["dy"], 0);
}

#[test]
fn test_redraw_repaints_overlay_after_game_over() {
    let mut session = start_with(record(ABOUT_TO_CRASH));
    session.update(100);
    let frames = session.surface().frames;

    session.redraw();
    assert_eq!(session.surface().frames, frames + 1);
    assert!(session.surface().shaded);
    assert_eq!(session.surface().texts[0], "Game Over!");
}

#[test]
fn test_unreadable_store_starts_fresh() {
    let session = Session::start(
        SessionConfig::default(),
        Canvas::default(),
        Speaker::default(),
        BrokenStore::default(),
        0,
    );

    assert_eq!(session.start_kind(), StartKind::Recovered);
    assert!(session.state().is_running());
    assert_eq!(session.state().head(), Position::new(10, 10));
    assert!(session.is_ticking());
}

#[test]
fn test_failed_saves_do_not_stop_the_game() {
    let mut session = Session::start(
        SessionConfig::default(),
        Canvas::default(),
        Speaker::default(),
        BrokenStore::default(),
        0,
    );
    session.handle_action(GameAction::Turn(Direction::Left), 0);

    // Ten ticks bring the head from (10,10) to the left edge; the autosave
    // due at 1000 ms fails after the last of them.
    for t in (100..=1000).step_by(100) {
        session.update(t);
    }
    assert_eq!(session.state().head(), Position::new(0, 10));
    assert_eq!(session.store().writes, 1);
    assert!(session.state().is_running());
    assert!(session.is_ticking());

    // The next tick runs into the wall; clearing the record fails too.
    session.update(1100);
    assert_eq!(session.state().phase(), Phase::GameOver(Collision::Wall));
    assert!(!session.is_ticking());
    assert_eq!(session.store().removes, 1);
    assert_eq!(session.audio().cues.last(), Some(&Cue::GameOver));
    assert_eq!(session.surface().texts[0], "Game Over!");

    // No save is attempted for a finished game.
    session.flush();
    assert_eq!(session.store().writes, 1);
}

#[test]
fn test_failed_save_is_retried_next_interval() {
    let mut session = Session::start(
        SessionConfig::default(),
        Canvas::default(),
        Speaker::default(),
        BrokenStore::default(),
        0,
    );

    session.update(1000);
    session.update(2000);
    assert_eq!(session.store().writes, 2);
    assert!(session.state().is_running());
    assert!(session.is_ticking());
}

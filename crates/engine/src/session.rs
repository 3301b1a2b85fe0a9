//! Session: the loop controller.
//!
//! Owns the [`GameState`], the tick timer, the autosave interval and the
//! three collaborators (surface, audio, store). The runner feeds it actions
//! and clock readings; it never reads the clock itself.

use tracing::{debug, info, warn};

use crate::core::{draw_frame, draw_game_over, AudioSink, GameState, RenderSurface};
use crate::store::{clear_game, load_game, save_game, Store};
use crate::timer::{Interval, Timer};
use crate::types::{Cue, GameAction, SAVE_INTERVAL_MS, SAVE_KEY, TICK_MS, TILE_COUNT};

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub tick_ms: u32,
    pub save_interval_ms: u32,
    pub tile_count: i32,
    pub seed: u32,
    pub muted: bool,
    pub save_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            save_interval_ms: SAVE_INTERVAL_MS,
            tile_count: TILE_COUNT,
            seed: 1,
            muted: false,
            save_key: SAVE_KEY.to_string(),
        }
    }
}

/// How the session's state came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartKind {
    /// No saved record
    Fresh,
    /// Saved record restored
    Resumed,
    /// Saved record unusable, fresh game instead
    Recovered,
}

pub struct Session<S, A, P> {
    state: GameState,
    config: SessionConfig,
    surface: S,
    audio: A,
    store: P,
    muted: bool,
    start_kind: StartKind,
    tick_timer: Timer,
    save_timer: Interval,
}

impl<S, A, P> Session<S, A, P>
where
    S: RenderSurface,
    A: AudioSink,
    P: Store,
{
    /// Load (or create) a game, draw it and start both timers.
    pub fn start(config: SessionConfig, surface: S, audio: A, store: P, now_ms: u64) -> Self {
        let (state, start_kind) =
            match load_game(&store, &config.save_key, config.tile_count, config.seed) {
                Ok(Some(state)) => {
                    info!(score = state.score(), len = state.len(), "resumed saved game");
                    (state, StartKind::Resumed)
                }
                Ok(None) => {
                    info!("no saved game, starting fresh");
                    (fresh_game(&config), StartKind::Fresh)
                }
                Err(err) if err.is_malformed() => {
                    warn!(%err, "discarding malformed saved game");
                    (fresh_game(&config), StartKind::Recovered)
                }
                Err(err) => {
                    warn!(%err, "could not read saved game");
                    (fresh_game(&config), StartKind::Recovered)
                }
            };

        let mut session = Self {
            state,
            muted: config.muted,
            start_kind,
            tick_timer: Timer::new(config.tick_ms as u64),
            save_timer: Interval::new(config.save_interval_ms as u64),
            config,
            surface,
            audio,
            store,
        };

        if session.state.is_running() {
            session.tick_timer.arm(now_ms);
        }
        session.save_timer.start(now_ms);
        session.redraw();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn start_kind(&self) -> StartKind {
        self.start_kind
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Whether the tick timer is pending (false while game over).
    pub fn is_ticking(&self) -> bool {
        self.tick_timer.is_armed()
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn handle_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Turn(direction) => {
                let accepted = self.state.steer(direction);
                debug!(?direction, accepted, "turn");
                accepted
            }
            GameAction::Restart => {
                if !self.state.restart() {
                    return false;
                }
                info!("game restarted");
                self.tick_timer.arm(now_ms);
                self.redraw();
                true
            }
            GameAction::ToggleMute => {
                self.muted = !self.muted;
                debug!(muted = self.muted, "mute toggled");
                self.surface.show_status(self.state.score(), self.muted);
                true
            }
        }
    }

    /// Fire whichever timers are due at `now_ms`.
    pub fn update(&mut self, now_ms: u64) {
        if self.tick_timer.fire(now_ms) {
            self.run_tick(now_ms);
        }
        if self.save_timer.fire(now_ms) {
            self.autosave();
        }
    }

    /// Milliseconds until the nearest pending timer.
    pub fn next_deadline_ms(&self, now_ms: u64) -> u64 {
        let tick = self.tick_timer.remaining_ms(now_ms);
        let save = self.save_timer.remaining_ms(now_ms);
        match (tick, save) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => self.config.tick_ms as u64,
        }
    }

    /// Repaint everything from the current state (start, restart, resize).
    pub fn redraw(&mut self) {
        self.surface.show_status(self.state.score(), self.muted);
        draw_frame(&self.state, &mut self.surface);
        if !self.state.is_running() {
            draw_game_over(&self.state, &mut self.surface);
        }
    }

    /// Save immediately if a game is in progress (used on quit).
    pub fn flush(&mut self) {
        self.autosave();
    }

    fn run_tick(&mut self, now_ms: u64) {
        let outcome = self.state.tick();

        if outcome.ate {
            debug!(score = self.state.score(), len = self.state.len(), "food eaten");
            self.cue(Cue::Eat);
            self.surface.show_status(self.state.score(), self.muted);
        }

        draw_frame(&self.state, &mut self.surface);

        if let Some(collision) = outcome.collision {
            self.tick_timer.cancel();
            info!(?collision, score = self.state.score(), "game over");
            self.cue(Cue::GameOver);
            draw_game_over(&self.state, &mut self.surface);
            // A finished game is not resumable; the next launch starts fresh.
            if let Err(err) = clear_game(&mut self.store, &self.config.save_key) {
                warn!(%err, "could not clear saved game");
            }
            return;
        }

        self.tick_timer.arm(now_ms);
    }

    fn autosave(&mut self) {
        if !self.state.is_running() {
            return;
        }
        match save_game(&mut self.store, &self.config.save_key, &self.state) {
            Ok(()) => debug!(score = self.state.score(), "game saved"),
            Err(err) => warn!(%err, "autosave failed"),
        }
    }

    fn cue(&mut self, cue: Cue) {
        if !self.muted {
            self.audio.play(cue);
        }
    }
}

fn fresh_game(config: &SessionConfig) -> GameState {
    GameState::with_tile_count(config.tile_count, config.seed)
}

//! Persistence module - saving and restoring a game in progress
//!
//! A game is stored as one JSON record under a single key of a string
//! key-value [`Store`]:
//!
//! ```text
//! {"snake":[{"x":10,"y":10}],"food":{"x":5,"y":5},"score":0,"dx":0,"dy":0}
//! ```
//!
//! Loading distinguishes three cases:
//!
//! - **Absent**: `Ok(None)`, start a fresh game
//! - **Well-formed**: `Ok(Some(state))` with all five fields restored
//! - **Malformed**: `Err(PersistError::MalformedState(_))`; callers discard
//!   the record and start fresh
//!
//! # Example
//!
//! ```
//! use tui_snake_store::{load_game, save_game, MemoryStore};
//! use tui_snake_store::core::GameState;
//!
//! let mut store = MemoryStore::new();
//! let game = GameState::new(7);
//! save_game(&mut store, "snakeGameState", &game).unwrap();
//!
//! let restored = load_game(&store, "snakeGameState", 20, 7).unwrap().unwrap();
//! assert_eq!(restored.snake(), game.snake());
//! ```

pub mod backend;
pub mod error;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use backend::{FileStore, MemoryStore, Store};
pub use error::{MalformedState, PersistError};

use crate::core::{GameState, SavedGame};

/// Serialize the five persisted fields of `state` under `key`.
pub fn save_game<S: Store + ?Sized>(
    store: &mut S,
    key: &str,
    state: &GameState,
) -> Result<(), PersistError> {
    let json = serde_json::to_string(&state.to_saved()).map_err(PersistError::Encode)?;
    store.set(key, &json)
}

/// Read and validate the record under `key`.
///
/// `tile_count` is the board the record must fit; `seed` drives food placement
/// for the resumed game.
pub fn load_game<S: Store + ?Sized>(
    store: &S,
    key: &str,
    tile_count: i32,
    seed: u32,
) -> Result<Option<GameState>, PersistError> {
    let Some(json) = store.get(key)? else {
        return Ok(None);
    };

    let saved: SavedGame = serde_json::from_str(&json).map_err(MalformedState::from)?;
    let state = GameState::restore(&saved, tile_count, seed).map_err(MalformedState::from)?;
    Ok(Some(state))
}

/// Drop the record under `key`, if any.
pub fn clear_game<S: Store + ?Sized>(store: &mut S, key: &str) -> Result<(), PersistError> {
    store.remove(key)
}

//! Persisted game record.
//!
//! The record keeps the field names of the storage format
//! (`{"snake":[{"x":..,"y":..}],"food":{..},"score":..,"dx":..,"dy":..}`) so
//! saves stay readable by anything that wrote that layout before.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game_state::GameState;
use crate::types::{Direction, Position};

/// One grid cell as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SavedCell {
    pub x: i32,
    pub y: i32,
}

impl From<Position> for SavedCell {
    fn from(value: Position) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<SavedCell> for Position {
    fn from(value: SavedCell) -> Self {
        Position::new(value.x, value.y)
    }
}

/// The five persisted fields of a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub snake: Vec<SavedCell>,
    pub food: SavedCell,
    pub score: u32,
    pub dx: i32,
    pub dy: i32,
}

/// A decoded record that does not describe a playable game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("direction ({dx}, {dy}) is not a unit step")]
    InvalidDirection { dx: i32, dy: i32 },
    #[error("snake has no segments")]
    EmptySnake,
    #[error("segment {index} at ({x}, {y}) is off the board")]
    SegmentOutOfBounds { index: usize, x: i32, y: i32 },
    #[error("segment {index} overlaps an earlier segment")]
    OverlappingSegments { index: usize },
    #[error("food at ({x}, {y}) is off the board")]
    FoodOutOfBounds { x: i32, y: i32 },
    #[error("food at ({x}, {y}) lies on the snake")]
    FoodOnSnake { x: i32, y: i32 },
}

impl GameState {
    /// Capture the persisted fields.
    pub fn to_saved(&self) -> SavedGame {
        let (dx, dy) = self.direction().delta();
        SavedGame {
            snake: self.snake().iter().copied().map(SavedCell::from).collect(),
            food: self.food().into(),
            score: self.score(),
            dx,
            dy,
        }
    }

    /// Rebuild a running game from a saved record.
    ///
    /// `seed` drives food placement from here on; it is not part of the record.
    pub fn restore(saved: &SavedGame, tile_count: i32, seed: u32) -> Result<Self, RestoreError> {
        let direction = Direction::from_delta(saved.dx, saved.dy).ok_or(
            RestoreError::InvalidDirection {
                dx: saved.dx,
                dy: saved.dy,
            },
        )?;

        GameState::from_parts(
            saved.snake.iter().copied().map(Position::from),
            saved.food.into(),
            direction,
            saved.score,
            tile_count,
            seed,
        )
    }
}

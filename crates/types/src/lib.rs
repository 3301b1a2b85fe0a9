//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, persistence, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a square of `TILE_COUNT` x `TILE_COUNT` cells. The tile count is
//! derived from a 400px drawing surface divided into 20px grid cells:
//!
//! - **Surface**: 400 "pixels" per side (`BOARD_PX`)
//! - **Cell**: 20 pixels (`GRID_SIZE`)
//! - **Tiles**: 20 per axis, indexed 0-19
//! - **Start**: a one-segment snake at (10, 10), standing still
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Delay between two simulation ticks |
//! | `SAVE_INTERVAL_MS` | 1000 | Cadence of the progress autosave |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position, TILE_COUNT};
//!
//! let head = Position::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(11, 10));
//!
//! // Reversals are detected on the direction itself.
//! assert!(Direction::Left.is_reverse_of(Direction::Right));
//! assert!(!Direction::Up.is_reverse_of(Direction::Right));
//!
//! // Persisted records carry the raw velocity pair.
//! assert_eq!(Direction::from_delta(0, -1), Some(Direction::Up));
//! assert_eq!(Direction::from_delta(1, 1), None);
//!
//! assert_eq!(TILE_COUNT, 20);
//! ```

/// Side length of the logical drawing surface, in pixels.
pub const BOARD_PX: u32 = 400;

/// Size of one grid cell, in pixels.
pub const GRID_SIZE: u32 = 20;

/// Number of cells per board axis (`BOARD_PX / GRID_SIZE`).
pub const TILE_COUNT: i32 = (BOARD_PX / GRID_SIZE) as i32;

/// Spawn cell of a fresh snake.
pub const START_POSITION: Position = Position { x: 10, y: 10 };

/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

/// Delay between two ticks (100ms).
pub const TICK_MS: u32 = 100;

/// Autosave cadence (1000ms), independent of the tick cadence.
pub const SAVE_INTERVAL_MS: u32 = 1000;

/// Random samples tried before food placement falls back to a board scan.
pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Storage key of the persisted game record.
pub const SAVE_KEY: &str = "snakeGameState";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_defaults() {
        assert_eq!(TILE_COUNT, 20);
        assert_eq!(TICK_MS, 100);
        assert_eq!(SAVE_INTERVAL_MS, 1000);
        assert_eq!(FOOD_SCORE, 10);
        assert_eq!(START_POSITION, Position::new(10, 10));
    }

    #[test]
    fn still_has_no_reverse() {
        assert_eq!(Direction::Still.reverse(), Direction::Still);
        assert!(!Direction::Still.is_reverse_of(Direction::Still));
    }

    #[test]
    fn delta_round_trips_through_pair() {
        for dir in [
            Direction::Still,
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
        }
    }
}

/// A cell on the board, in grid units.
///
/// Coordinates are signed so that a head stepping off the board (e.g. to
/// `x = -1`) is still representable for the wall check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction` (itself for `Direction::Still`).
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this cell lies within `[0, tile_count)` on both axes.
    pub fn in_bounds(self, tile_count: i32) -> bool {
        self.x >= 0 && self.x < tile_count && self.y >= 0 && self.y < tile_count
    }
}

/// Snake velocity.
///
/// - **Still**: (0, 0), the state of a fresh game before the first input
/// - **Up**: (0, -1)
/// - **Down**: (0, 1)
/// - **Left**: (-1, 0)
/// - **Right**: (1, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Still,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Velocity pair `(dx, dy)` in grid cells per tick.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Still => (0, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a velocity pair. Anything but the five legal pairs is rejected.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 0) => Some(Direction::Still),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Still => Direction::Still,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `self` points exactly against `other`.
    ///
    /// `Still` is never the reverse of anything.
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self != Direction::Still && self == other.reverse()
    }
}

/// Player commands, decoupled from the key that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Steer the snake (ignored for `Direction::Still`)
    Turn(Direction),
    /// Start a new game (only honoured after game over)
    Restart,
    /// Toggle audio cues on/off
    ToggleMute,
}

/// Short audio feedback events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Food eaten
    Eat,
    /// Snake crashed
    GameOver,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Keep a quarter of every channel (the end-of-game shade).
    pub const fn darken(self) -> Self {
        Self {
            r: self.r / 4,
            g: self.g / 4,
            b: self.b / 4,
        }
    }
}

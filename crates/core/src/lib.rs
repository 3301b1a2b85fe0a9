//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, files, or clocks, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`game_state`]: Snake, food, score, tick and steering
//! - [`food`]: Bounded food sampling with a board-scan fallback
//! - [`rng`]: Seeded LCG used for food placement
//! - [`render`]: Drawing surface and audio sink seams, frame and overlay drawing
//! - [`snapshot`]: Persisted record and its validation
//!
//! # Game Rules
//!
//! - **Tick**: The head advances one cell in the buffered direction; the tail
//!   follows unless food was eaten, in which case the snake grows by one
//! - **Food**: Worth 10 points, always placed on a free cell
//! - **Collisions**: Leaving the board or hitting the body ends the game.
//!   Moving into the cell the tail is vacating is allowed
//! - **Steering**: One buffered direction, last input wins, reversals refused
//! - **Restart**: Only after game over
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, Position};
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut game = GameState::from_parts(
//!     [Position::new(10, 10)],
//!     Position::new(11, 10),
//!     Direction::Right,
//!     0,
//!     20,
//!     12345,
//! )
//! .unwrap();
//!
//! let outcome = game.tick();
//! assert!(outcome.ate);
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.len(), 2);
//!
//! // Reversing into the body is refused.
//! assert!(!game.apply_action(GameAction::Turn(Direction::Left)));
//! ```
//!
//! # Timing
//!
//! The core has no clock. Call [`GameState::tick`](game_state::GameState::tick)
//! once per `TICK_MS`; the engine crate owns the timers.

pub mod food;
pub mod game_state;
pub mod render;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::place_food;
pub use game_state::{Collision, GameState, Phase, TickOutcome};
pub use render::{
    draw_frame, draw_game_over, AudioSink, RenderSurface, SilentAudio, TextSize, BACKGROUND, FOOD,
    SNAKE,
};
pub use rng::SimpleRng;
pub use snapshot::{RestoreError, SavedCell, SavedGame};
pub use types::Position;

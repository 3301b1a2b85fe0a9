//! Loop engine module - drives the rules engine in time.
//!
//! A [`Session`] owns the game state and its collaborators and reacts to two
//! kinds of input:
//!
//! - **Actions** ([`Session::handle_action`]): steering is buffered
//!   immediately; restart only takes effect after game over
//! - **Clock readings** ([`Session::update`]): the tick timer advances the
//!   snake, the autosave interval writes the record
//!
//! # Timers
//!
//! | Timer | Kind | Lifecycle |
//! |-------|------|-----------|
//! | tick | one-shot [`Timer`] | armed on start, re-armed after every tick, cancelled on game over, armed on restart |
//! | save | fixed-cadence [`Interval`] | runs for the whole session; skips while game over |
//!
//! Both timers take milliseconds from a caller-owned clock, so sessions can be
//! driven deterministically in tests.

pub mod session;
pub mod timer;

pub use tui_snake_core as core;
pub use tui_snake_store as store;
pub use tui_snake_types as types;

pub use session::{Session, SessionConfig, StartKind};
pub use timer::{Interval, Timer};

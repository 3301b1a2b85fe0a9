//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. There is no
//! repeat or hold handling: one key press is one action, and the rules engine
//! keeps only the latest direction.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};

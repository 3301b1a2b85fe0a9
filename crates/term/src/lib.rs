//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! - [`GameView`] implements the core [`RenderSurface`](crate::core::RenderSurface)
//!   on top of a [`FrameBuffer`]
//! - [`TerminalRenderer`] owns raw mode / alternate screen and writes frames
//!   as diffs
//! - [`TerminalBell`] implements the core [`AudioSink`](crate::core::AudioSink)

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use audio::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

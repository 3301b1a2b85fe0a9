//! Collaborator seams: the drawing surface and the audio sink.
//!
//! The rules engine never draws or plays sound itself. It describes a frame
//! through [`RenderSurface`] and leaves cues to an [`AudioSink`]; the terminal
//! front end implements both.

use crate::game_state::GameState;
use crate::types::{Cue, Position, Rgb};

/// Board background.
pub const BACKGROUND: Rgb = Rgb::new(0x34, 0x49, 0x5e);
/// Snake segments.
pub const SNAKE: Rgb = Rgb::new(0x2e, 0xcc, 0x71);
/// Food.
pub const FOOD: Rgb = Rgb::new(0xe7, 0x4c, 0x3c);

/// Relative weight of overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Title,
    Body,
}

/// Something the game can be drawn onto.
///
/// Coordinates given to [`RenderSurface::draw_text_centered`] are surface
/// pixels, with `size_px` giving the extent of the board area.
pub trait RenderSurface {
    /// Width and height of the board area, in pixels.
    fn size_px(&self) -> (u32, u32);

    /// Fill the whole board area with `color`.
    fn clear(&mut self, color: Rgb);

    /// Paint one grid cell. Cells off the board are ignored.
    fn fill_cell(&mut self, cell: Position, color: Rgb);

    /// Write `text` centred horizontally on `x`, on row `y`.
    fn draw_text_centered(&mut self, x: u32, y: u32, text: &str, size: TextSize);

    /// Darken everything drawn so far (end-of-game backdrop).
    fn shade(&mut self);

    /// Update the score label outside the board.
    fn show_status(&mut self, score: u32, muted: bool);
}

/// Fire-and-forget sound output. Failures must not reach the caller.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Audio sink that drops every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: Cue) {}
}

/// Draw one regular frame: background, food, then the snake on top.
pub fn draw_frame<S: RenderSurface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear(BACKGROUND);
    surface.fill_cell(state.food(), FOOD);
    for &segment in state.snake() {
        surface.fill_cell(segment, SNAKE);
    }
}

/// Draw the end-of-game overlay over the last frame.
pub fn draw_game_over<S: RenderSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let (w, h) = surface.size_px();
    let cx = w / 2;
    let cy = h / 2;

    surface.shade();
    surface.draw_text_centered(cx, cy, "Game Over!", TextSize::Title);
    surface.draw_text_centered(
        cx,
        cy + h / 10,
        &format!("Score: {}", state.score()),
        TextSize::Body,
    );
    surface.draw_text_centered(cx, cy + h / 5, "Press Space to Restart", TextSize::Body);
}

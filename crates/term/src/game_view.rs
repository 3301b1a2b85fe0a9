//! GameView: a terminal [`RenderSurface`] backed by a framebuffer.
//!
//! One board cell is `cell_w` x `cell_h` terminal characters (2x1 by default,
//! which roughly squares up typical glyphs). Surface "pixels" are terminal
//! characters inside the board frame. This module is pure (no I/O).

use crate::core::{RenderSurface, TextSize};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BORDER: CellStyle = CellStyle {
    fg: Rgb::new(200, 200, 200),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: false,
};

const LABEL: CellStyle = CellStyle {
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(0, 0, 0),
    bold: true,
    dim: false,
};

const HELP: CellStyle = CellStyle {
    fg: Rgb::new(150, 150, 160),
    bg: Rgb::new(0, 0, 0),
    bold: false,
    dim: true,
};

const HELP_LINES: [&str; 4] = ["arrows/wasd  move", "space  restart", "m  sound", "q  quit"];

/// A framebuffer-backed drawing surface for one board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    tile_count: i32,
    viewport: Viewport,
    origin: (u16, u16),
    fb: FrameBuffer,
    score: u32,
    muted: bool,
    dirty: bool,
}

impl GameView {
    pub fn new(tile_count: i32, viewport: Viewport) -> Self {
        let mut view = Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            tile_count: tile_count.max(1),
            viewport,
            origin: (0, 0),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            score: 0,
            muted: false,
            dirty: true,
        };
        view.relayout();
        view
    }

    pub fn with_cell_size(mut self, cell_w: u16, cell_h: u16) -> Self {
        self.cell_w = cell_w.max(1);
        self.cell_h = cell_h.max(1);
        self.relayout();
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self.relayout();
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new terminal size. The caller should redraw afterwards.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.fb.resize(viewport.width, viewport.height);
        self.relayout();
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Whether anything was drawn since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn board_w(&self) -> u16 {
        (self.tile_count as u16).saturating_mul(self.cell_w)
    }

    fn board_h(&self) -> u16 {
        (self.tile_count as u16).saturating_mul(self.cell_h)
    }

    fn relayout(&mut self) {
        let frame_w = self.board_w().saturating_add(2);
        let frame_h = self.board_h().saturating_add(2);
        let x = self.viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => self.viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        self.origin = (x, y);
        self.fb.clear(CellStyle::default().into_cell(' '));
        self.draw_chrome();
        self.dirty = true;
    }

    /// Top-left terminal cell of the board area (inside the border).
    fn board_origin(&self) -> (u16, u16) {
        (self.origin.0.saturating_add(1), self.origin.1.saturating_add(1))
    }

    fn draw_chrome(&mut self) {
        let (x, y) = self.origin;
        let w = self.board_w().saturating_add(2);
        let h = self.board_h().saturating_add(2);

        self.fb.put_char(x, y, '┌', BORDER);
        self.fb.put_char(x + w - 1, y, '┐', BORDER);
        self.fb.put_char(x, y + h - 1, '└', BORDER);
        self.fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            self.fb.put_char(x + dx, y, '─', BORDER);
            self.fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            self.fb.put_char(x, y + dy, '│', BORDER);
            self.fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }

        self.draw_status_line();

        let panel_x = x.saturating_add(w).saturating_add(2);
        let widest = HELP_LINES.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        if panel_x.saturating_add(widest) <= self.viewport.width {
            for (i, line) in HELP_LINES.iter().enumerate() {
                self.fb.put_str(panel_x, y + 1 + i as u16, line, HELP);
            }
        }
    }

    /// Score on the left of the top border, sound state on the right.
    fn draw_status_line(&mut self) {
        let (x, y) = self.origin;
        let w = self.board_w().saturating_add(2);
        for dx in 1..w - 1 {
            self.fb.put_char(x + dx, y, '─', BORDER);
        }

        let score = format!(" Score: {} ", self.score);
        self.fb.put_str(x + 2, y, &score, LABEL);

        if self.muted {
            let tag = " muted ";
            let tag_w = tag.chars().count() as u16;
            let tag_x = (x + w).saturating_sub(tag_w + 2);
            if tag_x > x + 2 + score.chars().count() as u16 {
                self.fb.put_str(tag_x, y, tag, BORDER);
            }
        }
    }
}

impl RenderSurface for GameView {
    fn size_px(&self) -> (u32, u32) {
        (self.board_w() as u32, self.board_h() as u32)
    }

    fn clear(&mut self, color: Rgb) {
        let (bx, by) = self.board_origin();
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
            dim: false,
        };
        self.fb.fill_rect(bx, by, self.board_w(), self.board_h(), ' ', style);
        self.dirty = true;
    }

    fn fill_cell(&mut self, cell: Position, color: Rgb) {
        if !cell.in_bounds(self.tile_count) {
            return;
        }
        let (bx, by) = self.board_origin();
        let px = bx + cell.x as u16 * self.cell_w;
        let py = by + cell.y as u16 * self.cell_h;
        let bg = self.fb.get(px, py).map(|c| c.style.bg).unwrap_or_default();
        let style = CellStyle {
            fg: color,
            bg,
            bold: false,
            dim: false,
        };
        self.fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        self.dirty = true;
    }

    fn draw_text_centered(&mut self, x: u32, y: u32, text: &str, size: TextSize) {
        let (bx, by) = self.board_origin();
        let text_w = text.chars().count() as u32;
        let col = (bx as u32 + x).saturating_sub(text_w / 2);
        let row = by as u32 + y;
        if row > u16::MAX as u32 {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cx = col + i as u32;
            if cx > u16::MAX as u32 {
                break;
            }
            let (cx, cy) = (cx as u16, row as u16);
            let bg = self.fb.get(cx, cy).map(|c| c.style.bg).unwrap_or_default();
            let style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg,
                bold: size == TextSize::Title,
                dim: false,
            };
            self.fb.put_char(cx, cy, ch, style);
        }
        self.dirty = true;
    }

    fn shade(&mut self) {
        let (bx, by) = self.board_origin();
        self.fb.restyle_rect(bx, by, self.board_w(), self.board_h(), |s| CellStyle {
            fg: s.fg.darken(),
            bg: s.bg.darken(),
            bold: s.bold,
            dim: true,
        });
        self.dirty = true;
    }

    fn show_status(&mut self, score: u32, muted: bool) {
        self.score = score;
        self.muted = muted;
        self.draw_status_line();
        self.dirty = true;
    }
}

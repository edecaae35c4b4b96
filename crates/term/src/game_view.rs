//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//! Each board cell becomes a `cell_w` x `cell_h` block of characters placed at
//! `coordinate * cell size`; the board's own wall cells form the frame.

use crate::core::{default_color, GameSnapshot, MinoState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{MinoKind, Rgba, BOARD_HEIGHT, BOARD_WIDTH};

const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';
const GHOST: char = '░';

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

/// A lightweight terminal renderer for the board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Terminal columns and rows covered by the board.
    pub fn board_size(&self) -> (u16, u16) {
        (
            u16::from(BOARD_WIDTH) * self.cell_w,
            u16::from(BOARD_HEIGHT) * self.cell_h,
        )
    }

    /// Top-left corner of the board inside `viewport` (centered).
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.board_size();
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let origin = self.board_origin(viewport);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                let at = (x as u16, y as u16);
                if kind == MinoKind::Empty {
                    let dot = CellStyle::new(Rgb::new(90, 90, 100), BACKGROUND);
                    self.fill_cell(fb, origin, at, '·', dot);
                } else {
                    self.fill_cell(fb, origin, at, BLOCK, block_style(default_color(kind)));
                }
            }
        }

        if snap.playable() {
            self.draw_piece(fb, origin, &snap.ghost, GHOST);
        }
        self.draw_piece(fb, origin, &snap.active, BLOCK);

        self.draw_side_panel(fb, snap, viewport, origin);

        if snap.game_over {
            self.draw_centered_text(fb, origin, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, origin: (u16, u16), piece: &MinoState, ch: char) {
        let style = block_style(piece.mino.color());
        for cell in piece.cells() {
            let (Ok(x), Ok(y)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
                continue;
            };
            if x < u16::from(BOARD_WIDTH) && y < u16::from(BOARD_HEIGHT) {
                self.fill_cell(fb, origin, (x, y), ch, style);
            }
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        (x, y): (u16, u16),
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.0 + x * self.cell_w;
        let py = origin.1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: (u16, u16),
    ) {
        let panel_x = origin.0 + self.board_size().0 + 2;
        if panel_x.saturating_add(6) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        fb.put_str(panel_x, origin.1, "LINES", label);
        fb.put_u32(panel_x, origin.1 + 1, snap.score, CellStyle::default());
    }

    fn draw_centered_text(&self, fb: &mut FrameBuffer, origin: (u16, u16), text: &str) {
        let (w, h) = self.board_size();
        let text_w = text.chars().count() as u16;
        let x = origin.0 + w.saturating_sub(text_w) / 2;
        let y = origin.1 + h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

/// Solid or translucent block over the board background
fn block_style(color: Rgba) -> CellStyle {
    CellStyle::new(Rgb::composite(color, BACKGROUND), BACKGROUND)
}

//! GameView: maps a [`BoardSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Widest board cell, in terminal columns.
pub const MAX_CELL_W: u16 = 8;

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

/// Screen position of the well's top-left border corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Origin {
    x: u16,
    y: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keep squares roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &BoardSnapshot,
        status: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w + 14) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                let kind = snap.cells[y as usize][x as usize];
                self.draw_cell(fb, origin, x, y, kind);
            }
        }

        if let Some(cells) = snap.active_cells {
            for (x, y) in cells {
                self.draw_cell(fb, origin, x, y, snap.active_kind);
            }
        }

        self.draw_side_panel(fb, snap, status, origin, frame_w);

        if snap.paused() {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, "PAUSED");
        } else if snap.game_over() {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, status: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    /// Screen column and row of board cell (x, y). Board row 0 is drawn last.
    fn screen_pos(&self, origin: Origin, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        let col = origin.x + 1 + x as u16 * self.cell_w;
        let row = origin.y + 1 + (BOARD_HEIGHT as u16 - 1 - y as u16);
        Some((col, row))
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, kind: ShapeKind) {
        let Some((col, row)) = self.screen_pos(origin, x, y) else {
            return;
        };
        let (ch, style) = match kind_color(kind) {
            Some(fg) => ('█', CellStyle::new(fg, WELL_BG).bold()),
            None => ('·', CellStyle::new(Rgb::new(90, 90, 100), WELL_BG)),
        };
        fb.fill_rect(col, row, self.cell_w, 1, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, origin: Origin, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (x, y) = (origin.x, origin.y);
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(right, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        status: &str,
        origin: Origin,
        frame_w: u16,
    ) {
        let x = origin.x + frame_w + 2;
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = origin.y;
        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);
        y += 3;

        fb.put_str(x, y, "LINES", label);
        fb.put_str(x, y + 1, &snap.lines.to_string(), value);
        y += 3;

        fb.put_str(x, y, "PIECE", label);
        fb.put_str(x, y + 1, piece_label(snap.active_kind), value);
        y += 3;

        if !status.is_empty() {
            fb.put_str(x, y, status, value);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = origin.x + frame_w.saturating_sub(text_w) / 2;
        let y = origin.y + frame_h / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

/// Display color per kind; `None` for empty cells.
pub fn kind_color(kind: ShapeKind) -> Option<Rgb> {
    match kind {
        ShapeKind::Empty => None,
        ShapeKind::Z => Some(Rgb::new(204, 102, 102)),
        ShapeKind::S => Some(Rgb::new(102, 204, 102)),
        ShapeKind::Line => Some(Rgb::new(102, 102, 204)),
        ShapeKind::T => Some(Rgb::new(204, 204, 102)),
        ShapeKind::Square => Some(Rgb::new(204, 102, 204)),
        ShapeKind::L => Some(Rgb::new(102, 204, 204)),
        ShapeKind::MirroredL => Some(Rgb::new(218, 170, 0)),
    }
}

fn piece_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Empty => "-",
        ShapeKind::Z => "Z",
        ShapeKind::S => "S",
        ShapeKind::Line => "I",
        ShapeKind::T => "T",
        ShapeKind::Square => "O",
        ShapeKind::L => "L",
        ShapeKind::MirroredL => "J",
    }
}

//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: two score lines, the bordered grid, and the
//! contextual button. The game-over report and the pause banner are drawn
//! over the middle of the grid.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameState, Point, COLUMN_COUNT, ROW_COUNT};

/// Rows above the grid frame: two score lines and a gap.
const HEADER_ROWS: u16 = 3;
/// Rows below the grid frame: a gap and the button.
const FOOTER_ROWS: u16 = 2;
/// Key hint under the game-over report; fits inside the grid frame.
const REPORT_HINT: &str = "Enter:New Esc:Hide";

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

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the grid frame landed in the framebuffer.
#[derive(Debug, Clone, Copy)]
struct FrameRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show everything.
    pub fn min_viewport(&self) -> Viewport {
        let (frame_w, frame_h) = self.frame_size();
        Viewport::new(frame_w, HEADER_ROWS + frame_h + FOOTER_ROWS)
    }

    /// Terminal position of a grid cell's top-left glyph, if it fits.
    pub fn cell_origin(&self, p: Point, viewport: Viewport) -> Option<(u16, u16)> {
        if p.x < 0 || p.y < 0 || p.x >= COLUMN_COUNT || p.y >= ROW_COUNT {
            return None;
        }
        let frame = self.frame_rect(viewport);
        let px = frame.x + 1 + (p.x as u16) * self.cell_w;
        let py = frame.y + 1 + (p.y as u16) * self.cell_h;
        (px < viewport.width && py < viewport.height).then_some((px, py))
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Allocation-free once the framebuffer has its final size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame_rect(viewport);

        self.draw_header(fb, snap, frame);

        let board = CellStyle::new(Rgb::BLACK, Rgb::BLACK);
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', board);
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK));

        let food = CellStyle::new(Rgb::RED, Rgb::BLACK);
        self.fill_cell_rect(fb, frame, snap.food, '█', food);

        let body = CellStyle::new(Rgb::GREEN, Rgb::BLACK);
        for (i, &p) in snap.snake_body.iter().enumerate() {
            let style = if i == 0 { body.bold() } else { body };
            self.fill_cell_rect(fb, frame, p, '█', style);
        }

        self.draw_button(fb, snap, frame);

        if snap.report_visible {
            self.draw_report(fb, snap, frame);
        } else if snap.state == GameState::Paused {
            self.draw_banner(fb, frame, frame.y + frame.h / 2, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            (COLUMN_COUNT as u16) * self.cell_w + 2,
            (ROW_COUNT as u16) * self.cell_h + 2,
        )
    }

    fn frame_rect(&self, viewport: Viewport) -> FrameRect {
        let (w, h) = self.frame_size();
        let total_h = HEADER_ROWS + h + FOOTER_ROWS;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: top + HEADER_ROWS,
            w,
            h,
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let top = frame.y - HEADER_ROWS;

        let x = fb.put_str(frame.x, top, "Current Score: ", label);
        fb.put_u32(x, top, snap.score, value);

        let x = fb.put_str(frame.x, top + 1, "High Score: ", label);
        fb.put_u32(x, top + 1, snap.high_score, value);
    }

    fn draw_button(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        let y = frame.y + frame.h + 1;
        let label_w = snap.button_label.chars().count() as u16 + 4;
        let x = frame.x + frame.w.saturating_sub(label_w) / 2;
        let style = CellStyle::new(Rgb::WHITE, Rgb::new(40, 90, 200)).bold();

        let x = fb.put_str(x, y, "[ ", style);
        let x = fb.put_str(x, y, snap.button_label, style);
        fb.put_str(x, y, " ]", style);
    }

    fn draw_report(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: FrameRect) {
        let panel = CellStyle::new(Rgb::WHITE, Rgb::new(20, 20, 20));
        let mid = frame.y + frame.h / 2;
        fb.fill_rect(frame.x + 1, mid - 2, frame.w - 2, 5, ' ', panel);

        self.draw_banner(fb, frame, mid - 2, "GAME OVER");

        let score_w = "Your Score: ".len() as u16 + digit_count(snap.score) + 1;
        let x = frame.x + frame.w.saturating_sub(score_w) / 2;
        let x = fb.put_str(x, mid - 1, "Your Score: ", panel);
        let x = fb.put_u32(x, mid - 1, snap.score, panel);
        fb.put_str(x, mid - 1, ".", panel);

        let high_w = "High Score: ".len() as u16 + digit_count(snap.high_score);
        let x = frame.x + frame.w.saturating_sub(high_w) / 2;
        let x = fb.put_str(x, mid, "High Score: ", panel);
        fb.put_u32(x, mid, snap.high_score, panel);

        let hint_w = REPORT_HINT.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(hint_w) / 2;
        fb.put_str(x, mid + 2, REPORT_HINT, panel.dim());
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, frame: FrameRect, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        fb.put_str(x, y, text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
        let FrameRect { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.y < 0 || p.x >= COLUMN_COUNT || p.y >= ROW_COUNT {
            return;
        }
        let px = frame.x + 1 + (p.x as u16) * self.cell_w;
        let py = frame.y + 1 + (p.y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

//! GameView: maps the game session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_stacker_core::{GameContext, GameSession, Row};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, BOARD_COLS, BOARD_LANES};

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

const BLOCK: Rgb = Rgb::new(200, 50, 50);
const FLASH: Rgb = Rgb::new(255, 50, 50);
const HIGHLIGHT: Rgb = Rgb::new(255, 200, 0);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(255, 255, 255);
const AREA_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(50, 50, 50);

/// A lightweight terminal renderer for the stacker game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Width of the bordered stack frame in terminal columns.
    pub fn frame_width(&self) -> u16 {
        BOARD_COLS as u16 * self.cell_w + 2
    }

    /// Height of the bordered stack frame in terminal rows.
    pub fn frame_height(&self) -> u16 {
        BOARD_LANES as u16 * self.cell_h + 2
    }

    /// Render the current session and context into a framebuffer.
    ///
    /// Layout: a score line on top, the bordered stack area below it with
    /// lane 0 at the bottom, and a side panel (title, key help, high
    /// scores) to the right when the viewport is wide enough.
    pub fn render(
        &self,
        session: &GameSession,
        ctx: &GameContext,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, AREA_BG));

        let frame_x = 0;
        let frame_y = 1;
        let frame_w = self.frame_width();
        let frame_h = self.frame_height();

        self.draw_score_line(&mut fb, session, ctx, frame_w);

        fb.fill_rect(
            frame_x + 1,
            frame_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(TEXT, AREA_BG),
        );
        self.draw_border(&mut fb, frame_x, frame_y, frame_w, frame_h);

        let block = CellStyle::new(BLOCK, AREA_BG);
        for row in session.rows() {
            self.draw_row(&mut fb, frame_x, frame_y, row, block);
        }

        match session.phase() {
            Phase::Playing => {
                if let Some(moving) = session.moving_row() {
                    self.draw_row(&mut fb, frame_x, frame_y, &moving, block);
                }
            }
            Phase::Flashing => {
                // Odd blink intervals leave the failed row hidden against
                // the area background.
                if session.flash_visible() {
                    if let Some(failed) = session.failed_row() {
                        let style = CellStyle::new(FLASH, AREA_BG).bold();
                        self.draw_row(&mut fb, frame_x, frame_y, &failed, style);
                    }
                }
            }
            Phase::TextEntry => {
                self.draw_text_entry_overlay(&mut fb, session, frame_x, frame_y, frame_w, frame_h);
            }
            Phase::Over => {
                self.draw_over_overlay(&mut fb, session, frame_x, frame_y, frame_w, frame_h);
            }
        }

        self.draw_side_panel(&mut fb, ctx, viewport, frame_x + frame_w + 2, frame_y);

        fb
    }

    fn draw_score_line(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        ctx: &GameContext,
        frame_w: u16,
    ) {
        let style = CellStyle::new(TEXT, AREA_BG).bold();
        fb.put_str(1, 0, &format!("Score: {}", session.score()), style);

        let high = format!("High: {}", ctx.high_score());
        let x = frame_w.saturating_sub(high.chars().count() as u16 + 1);
        fb.put_str(x, 0, &high, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(BORDER, AREA_BG);
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

    /// Draw one row into the stack area, clipping columns outside the
    /// board (a moving row may legitimately hang off either edge).
    fn draw_row(&self, fb: &mut FrameBuffer, frame_x: u16, frame_y: u16, row: &Row, style: CellStyle) {
        let left_col = row.position().floor() as i32;
        let lane_y = (BOARD_LANES - 1 - row.lane()) as u16;

        for i in 0..row.width() as i32 {
            let col = left_col + i;
            if col < 0 || col >= BOARD_COLS as i32 {
                continue;
            }
            let px = frame_x + 1 + col as u16 * self.cell_w;
            let py = frame_y + 1 + lane_y * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_over_overlay(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        frame_x: u16,
        frame_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let msg = if session.won() { "YOU WIN!" } else { "GAME OVER" };
        let mid_y = frame_y + frame_h / 2;

        self.put_centered(fb, frame_x, frame_w, mid_y - 1, msg, CellStyle::new(HIGHLIGHT, AREA_BG).bold());
        self.put_centered(fb, frame_x, frame_w, mid_y + 1, "R: restart", CellStyle::new(TEXT, AREA_BG));
        self.put_centered(fb, frame_x, frame_w, mid_y + 2, "ESC: quit", CellStyle::new(TEXT, AREA_BG));
    }

    fn draw_text_entry_overlay(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        frame_x: u16,
        frame_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = frame_y + frame_h / 2;
        let prompt = format!("Initials: {}", session.entry_text());

        self.put_centered(fb, frame_x, frame_w, mid_y - 2, "NEW HIGH SCORE!", CellStyle::new(HIGHLIGHT, AREA_BG).bold());
        self.put_centered(fb, frame_x, frame_w, mid_y, &prompt, CellStyle::new(TEXT, AREA_BG));
        self.put_centered(fb, frame_x, frame_w, mid_y + 2, "(Enter = done)", CellStyle::new(TEXT, AREA_BG));
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        frame_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = frame_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        ctx: &GameContext,
        viewport: Viewport,
        panel_x: u16,
        panel_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 14 {
            return;
        }

        fb.fill_rect(
            panel_x,
            panel_y,
            panel_w,
            viewport.height.saturating_sub(panel_y),
            ' ',
            CellStyle::new(TEXT, PANEL_BG),
        );

        let title = CellStyle::new(HIGHLIGHT, PANEL_BG).bold();
        let label = CellStyle::new(TEXT, PANEL_BG);

        let x = panel_x + 1;
        let mut y = panel_y + 1;
        fb.put_str(x, y, "STACKER", title);
        y = y.saturating_add(2);

        for line in ["SPACE lock row", "R     restart", "ESC   quit"] {
            fb.put_str(x, y, line, label);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        fb.put_str(x, y, "High Scores:", title);
        y = y.saturating_add(1);

        if ctx.leaderboard().is_empty() {
            fb.put_str(x, y, "No records yet", label);
            return;
        }

        for (i, entry) in ctx.leaderboard().entries().iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let line = format!("{}. {} - {}", i + 1, entry.initials, entry.score);
            fb.put_str(x, y, &line, label);
            y = y.saturating_add(1);
        }
    }
}

//! Game session module - the gameplay state machine
//!
//! Ties together row motion, the overlap engine, scoring, and the
//! fail-flash timing. One session is one attempt at the tower; the
//! process-wide [`GameContext`] is passed in by reference and survives
//! restarts.

use arrayvec::ArrayVec;

use crate::context::GameContext;
use crate::overlap::{apply_overlap, compute_overlap};
use crate::row::Row;
use crate::types::{
    GameAction, Phase, BLINK_PERIOD_SECS, BOARD_COLS, BOARD_LANES, FLASH_DURATION_SECS,
    INITIAL_ROW_WIDTH, MAX_INITIALS, TARGET_LANE,
};

const LANE_CAP: usize = BOARD_LANES as usize;

/// Complete state of one stacking attempt.
///
/// Locked rows are append-only, bottom to top; `locked[i]` sits at lane
/// `i`, and the moving row's lane always equals `locked.len()`.
#[derive(Debug, Clone)]
pub struct GameSession {
    locked: ArrayVec<Row, LANE_CAP>,
    moving: Option<Row>,
    /// Stationary snapshot blinked during the fail flash.
    failed: Option<Row>,
    phase: Phase,
    /// Remaining fail-flash seconds; meaningful only while Flashing.
    flash_timer: f32,
    score: u32,
    won: bool,
    /// At-most-once guard for the initials prompt.
    initials_requested: bool,
    /// Initials being typed while in TextEntry.
    entry: String,
    target_lane: u8,
}

impl GameSession {
    /// Fresh session: the base row plus the first moving row, centered.
    pub fn new() -> Self {
        let mut locked = ArrayVec::new();
        locked.push(Row::base());

        let start = ((BOARD_COLS - INITIAL_ROW_WIDTH) / 2) as f32;
        let moving = Row::moving(1, INITIAL_ROW_WIDTH, start);

        Self {
            locked,
            moving: Some(moving),
            failed: None,
            phase: Phase::Playing,
            flash_timer: 0.0,
            score: 0,
            won: false,
            initials_requested: false,
            entry: String::new(),
            target_lane: TARGET_LANE,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn target_lane(&self) -> u8 {
        self.target_lane
    }

    /// Locked rows, bottom to top. Never empty; index equals lane.
    pub fn rows(&self) -> &[Row] {
        &self.locked
    }

    pub fn moving_row(&self) -> Option<Row> {
        self.moving
    }

    pub fn failed_row(&self) -> Option<Row> {
        self.failed
    }

    pub fn flash_timer(&self) -> f32 {
        self.flash_timer
    }

    /// Initials typed so far (TextEntry phase).
    pub fn entry_text(&self) -> &str {
        &self.entry
    }

    /// Whether the blinking failed row is currently highlighted.
    ///
    /// Even blink intervals of elapsed flash time show the highlight, odd
    /// ones hide the row.
    pub fn flash_visible(&self) -> bool {
        let elapsed = FLASH_DURATION_SECS - self.flash_timer;
        let intervals = (elapsed / BLINK_PERIOD_SECS) as i32;
        intervals % 2 == 0
    }

    /// Restart is accepted once the session is Over, or during a flash
    /// whose timer already expired.
    pub fn can_restart(&self) -> bool {
        match self.phase {
            Phase::Over => true,
            Phase::Flashing => self.flash_timer <= 0.0,
            Phase::Playing | Phase::TextEntry => false,
        }
    }

    /// Advance one fixed tick.
    ///
    /// Playing moves the oscillating row; Flashing burns down the flash
    /// timer by `dt` seconds of real time and ends in Over. Terminal
    /// phases ignore ticks. Returns whether anything advanced.
    pub fn tick(&mut self, dt: f32, ctx: &GameContext) -> bool {
        match self.phase {
            Phase::Playing => match self.moving.as_mut() {
                Some(row) => {
                    row.advance();
                    true
                }
                None => false,
            },
            Phase::Flashing => {
                self.flash_timer -= dt;
                if self.flash_timer <= 0.0 {
                    self.enter_over(false, ctx);
                }
                true
            }
            Phase::Over | Phase::TextEntry => false,
        }
    }

    /// Apply one sampled input action. Returns whether it was accepted in
    /// the current phase.
    pub fn apply_action(&mut self, action: GameAction, ctx: &mut GameContext) -> bool {
        match action {
            GameAction::LockRow => self.lock_row(ctx),
            GameAction::Restart => {
                if self.can_restart() {
                    *self = Self::new();
                    true
                } else {
                    false
                }
            }
            GameAction::TextChar(c) => self.push_initial(c),
            GameAction::TextBackspace => {
                self.phase == Phase::TextEntry && self.entry.pop().is_some()
            }
            GameAction::TextConfirm => self.confirm_initials(ctx),
        }
    }

    /// Lock the moving row against the top of the stack.
    ///
    /// A non-positive overlap starts the fail flash; a positive one
    /// narrows the row, appends it, scores, and either wins or spawns the
    /// next moving row one lane up.
    fn lock_row(&mut self, ctx: &mut GameContext) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(mut row) = self.moving.take() else {
            return false;
        };
        let Some(below) = self.locked.last() else {
            return false;
        };

        let overlap = compute_overlap(below, &row);
        if overlap <= 0 {
            self.failed = Some(row.frozen());
            self.flash_timer = FLASH_DURATION_SECS;
            self.phase = Phase::Flashing;
            return true;
        }

        let width = overlap as u8;
        apply_overlap(&mut row, below, width);

        let lane = row.lane();
        let left_edge = row.position();
        // Locked rows are stationary from here on.
        self.locked.push(row.frozen());

        self.score += 1;
        ctx.record_score(self.score);

        if lane == self.target_lane {
            self.enter_over(true, ctx);
        } else {
            self.moving = Some(Row::moving(lane + 1, width, left_edge));
        }
        true
    }

    /// Transition into Over, detouring through TextEntry when the score
    /// qualifies for the leaderboard. `won` is set here and nowhere else.
    fn enter_over(&mut self, won: bool, ctx: &GameContext) {
        self.won = won;
        self.phase = Phase::Over;

        let qualifies = self.score > 0
            && self.score == ctx.high_score()
            && ctx.leaderboard().best().map_or(true, |best| self.score >= best);

        if qualifies && !self.initials_requested {
            self.initials_requested = true;
            self.entry.clear();
            self.phase = Phase::TextEntry;
        }
    }

    fn push_initial(&mut self, c: char) -> bool {
        if self.phase != Phase::TextEntry {
            return false;
        }
        if !c.is_ascii_alphabetic() || self.entry.chars().count() >= MAX_INITIALS {
            return false;
        }
        self.entry.push(c.to_ascii_uppercase());
        true
    }

    /// Commit the initials buffer. An empty buffer inserts nothing; either
    /// way the session lands in Over.
    fn confirm_initials(&mut self, ctx: &mut GameContext) -> bool {
        if self.phase != Phase::TextEntry {
            return false;
        }
        if !self.entry.is_empty() {
            ctx.leaderboard_mut().insert(self.score, &self.entry);
        }
        self.phase = Phase::Over;
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

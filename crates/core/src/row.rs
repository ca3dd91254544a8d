//! Row module - a single horizontal block of the stack
//!
//! A row is either moving (oscillating between the board edges) or
//! stationary (the base row, every locked row, and the fail-flash
//! snapshot). Position is real-valued while moving; it is never snapped
//! to the column grid.

use thiserror::Error;

use crate::types::{BASE_SPEED, BOARD_COLS, SPEED_INCREMENT};

/// A row was constructed with an empty horizontal span.
///
/// Zero-width rows are never produced by gameplay: a lock whose overlap is
/// not strictly positive is intercepted as a failure before any row is
/// narrowed or spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid row geometry: zero width at lane {lane}")]
pub struct InvalidRowGeometry {
    pub lane: u8,
}

/// Speed for a row at the given lane, in columns per tick.
///
/// Linear and uncapped; this is the game's only difficulty curve.
pub fn speed_for_lane(lane: u8) -> f32 {
    BASE_SPEED + SPEED_INCREMENT * lane as f32
}

/// A horizontal block occupying `width` columns starting at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    width: u8,
    position: f32,
    lane: u8,
    direction: i8,
    speed: f32,
}

impl Row {
    /// Create a row, rejecting empty spans.
    ///
    /// `direction` is one of -1, 0, +1; stationary rows use 0 with zero
    /// speed. The lane is fixed for the lifetime of the row.
    pub fn new(
        width: u8,
        position: f32,
        lane: u8,
        direction: i8,
        speed: f32,
    ) -> Result<Self, InvalidRowGeometry> {
        if width == 0 {
            return Err(InvalidRowGeometry { lane });
        }
        Ok(Self {
            width,
            position,
            lane,
            direction,
            speed,
        })
    }

    /// The immovable full-width base row at lane 0.
    pub fn base() -> Self {
        Self {
            width: BOARD_COLS,
            position: 0.0,
            lane: 0,
            direction: 0,
            speed: 0.0,
        }
    }

    /// Moving row spawned above the stack after a successful lock.
    ///
    /// Callers must have verified the width is non-empty; gameplay only
    /// reaches this with a strictly positive overlap.
    pub(crate) fn moving(lane: u8, width: u8, position: f32) -> Self {
        debug_assert!(width > 0, "moving rows must occupy at least one column");
        Self {
            width,
            position,
            lane,
            direction: 1,
            speed: speed_for_lane(lane),
        }
    }

    /// Stationary copy of this row, used as the fail-flash snapshot.
    pub fn frozen(&self) -> Self {
        Self {
            direction: 0,
            speed: 0.0,
            ..*self
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn lane(&self) -> u8 {
        self.lane
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Right edge of the span (`position + width`).
    pub fn right(&self) -> f32 {
        self.position + self.width as f32
    }

    /// Narrow this row to a new span. Gameplay-internal: only the overlap
    /// engine rewrites a span, and only with a verified non-empty width.
    pub(crate) fn set_span(&mut self, position: f32, width: u8) {
        debug_assert!(width > 0);
        self.position = position;
        self.width = width;
    }

    /// Move horizontally by one tick, sliding fully off-screen before
    /// reversing.
    ///
    /// The reversal clamps keep `position` within `[-width, BOARD_COLS]`
    /// no matter how fast the row travels. Stationary rows never move.
    pub fn advance(&mut self) {
        if self.direction == 0 || self.speed <= 0.0 {
            return;
        }

        self.position += self.direction as f32 * self.speed;
        // Round to millicolumn precision to keep repeated additions stable.
        self.position = (self.position * 1000.0).round() / 1000.0;

        if self.direction > 0 {
            if self.position > BOARD_COLS as f32 {
                self.position = BOARD_COLS as f32;
                self.direction = -1;
            }
        } else if self.position + (self.width as f32) < 0.0 {
            self.position = -(self.width as f32);
            self.direction = 1;
        }
    }
}

//! Core types module - shared constants and plain data types
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, UI rendering).
//!
//! # Board Dimensions
//!
//! The playfield is a narrow tower:
//!
//! - **Columns**: 7 (indexed 0-6, left to right)
//! - **Lanes**: 15 (indexed 0-14, lane 0 is the base at the bottom)
//! - **Target lane**: 14, the lane whose lock wins the game
//!
//! # Game Timing Constants
//!
//! The game runs a fixed timestep at roughly 30 Hz:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed timestep interval (~30 FPS) |
//! | `FLASH_DURATION_SECS` | 2.0 | Length of the fail-flash animation |
//! | `BLINK_PERIOD_SECS` | 0.2 | Blink interval during the fail flash |
//!
//! # Speed Curve
//!
//! Row speed is expressed in columns per tick and grows linearly with the
//! lane index (`BASE_SPEED + SPEED_INCREMENT * lane`) with no cap. This
//! is the game's only difficulty curve.
//!
//! # Examples
//!
//! ```
//! use tui_stacker_types::{GameAction, Phase, BOARD_COLS, BOARD_LANES, TARGET_LANE};
//!
//! assert_eq!(BOARD_COLS, 7);
//! assert_eq!(BOARD_LANES, 15);
//! assert_eq!(TARGET_LANE, BOARD_LANES - 1);
//!
//! let action = GameAction::LockRow;
//! assert_ne!(Phase::Playing, Phase::Over);
//! assert_eq!(action, GameAction::LockRow);
//! ```

/// Board width in columns (7)
pub const BOARD_COLS: u8 = 7;

/// Number of vertical lanes (15), lane 0 is the immovable base row
pub const BOARD_LANES: u8 = 15;

/// Lane whose successful lock wins the game (topmost lane)
pub const TARGET_LANE: u8 = BOARD_LANES - 1;

/// Width of the first moving row, narrower than the board
pub const INITIAL_ROW_WIDTH: u8 = 3;

/// Fixed timestep interval in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 33;

/// Row speed at lane 0, in columns per tick
pub const BASE_SPEED: f32 = 0.3;

/// Speed added per lane of height, in columns per tick
pub const SPEED_INCREMENT: f32 = 0.03;

/// Total length of the fail-flash animation in seconds
pub const FLASH_DURATION_SECS: f32 = 2.0;

/// Blink interval of the fail flash in seconds (even intervals highlight)
pub const BLINK_PERIOD_SECS: f32 = 0.2;

/// Number of leaderboard entries retained
pub const LEADERBOARD_CAP: usize = 5;

/// Maximum number of initials characters accepted for a leaderboard entry
pub const MAX_INITIALS: usize = 3;

/// Session phase.
///
/// The lifecycle runs `Playing → Flashing → Over`; a failed lock detours
/// through `Flashing`, a winning lock goes straight to `Over`. `TextEntry`
/// is entered instead of `Over` when the finished score qualifies for the
/// leaderboard, and returns to `Over` once the initials are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The moving row oscillates and lock commands are accepted
    Playing,
    /// A failed lock is blinking; no input except quit is honored
    Flashing,
    /// Initials are being typed for a qualifying score
    TextEntry,
    /// Terminal state; restart starts a fresh session
    Over,
}

/// Game actions sampled from input once per tick
///
/// Each action maps to a specific transition on the session state machine.
/// Quit is not a session action: the binary checks for it directly and
/// exits, which is what lets it take effect from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Freeze the moving row against the stack (Playing only)
    LockRow,
    /// Start a fresh session (Over, or Flashing once the timer expired)
    Restart,
    /// Append a letter to the initials buffer (TextEntry only)
    TextChar(char),
    /// Remove the last initials character (TextEntry only)
    TextBackspace,
    /// Commit the initials buffer (TextEntry only)
    TextConfirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_geometry_constants() {
        // The first moving row must be narrower than the board so the first
        // lock always has a reachable overlap.
        assert!(INITIAL_ROW_WIDTH < BOARD_COLS);
        assert_eq!(TARGET_LANE, 14);
    }

    #[test]
    fn timing_constants() {
        assert_eq!(TICK_MS, 33);
        assert_eq!(FLASH_DURATION_SECS, 2.0);
        assert_eq!(BLINK_PERIOD_SECS, 0.2);
    }

    #[test]
    fn speed_curve_constants() {
        assert_eq!(BASE_SPEED, 0.3);
        assert_eq!(SPEED_INCREMENT, 0.03);
    }
}

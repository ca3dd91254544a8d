//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the gameplay rules and state management. It
//! has **zero dependencies** on UI, terminal I/O, or timing sources,
//! making it:
//!
//! - **Deterministic**: fixed-timestep motion with no hidden clock reads
//! - **Testable**: every transition is reachable from plain method calls
//! - **Portable**: runs identically in the terminal binary or headless
//!
//! # Module Structure
//!
//! - [`row`]: one oscillating or locked horizontal block
//! - [`overlap`]: pure span-intersection functions used at lock time
//! - [`session`]: the Playing/Flashing/TextEntry/Over state machine
//! - [`leaderboard`]: top-5 score/initials ranking
//! - [`context`]: process-wide high score + leaderboard handle
//!
//! # Game Rules
//!
//! - The base row fills the board; each later row oscillates, sliding
//!   fully off-screen before reversing.
//! - A lock keeps only the columns shared with the row below. Zero shared
//!   columns is a miss: the row blinks for two seconds, then the session
//!   is over.
//! - Locking the target lane wins immediately; a win never flashes.
//! - Row speed rises linearly with height; that curve is the entire
//!   difficulty ramp.
//! - A finished score that ties the high score and heads the leaderboard
//!   prompts once for initials.
//!
//! # Example
//!
//! ```
//! use tui_stacker_core::{GameContext, GameSession};
//! use tui_stacker_types::{GameAction, Phase};
//!
//! let mut ctx = GameContext::new();
//! let mut session = GameSession::new();
//!
//! // The first moving row starts centered over the full-width base, so
//! // an immediate lock keeps its whole width.
//! assert!(session.apply_action(GameAction::LockRow, &mut ctx));
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.phase(), Phase::Playing);
//! assert_eq!(ctx.high_score(), 1);
//! ```
//!
//! # Timing
//!
//! The session expects one [`GameSession::tick`] per fixed ~30 Hz tick.
//! Row motion is expressed per tick; only the fail-flash timer consumes
//! the measured elapsed seconds.

pub mod context;
pub mod leaderboard;
pub mod overlap;
pub mod row;
pub mod session;

pub use tui_stacker_types as types;

// Re-export commonly used types for convenience
pub use context::GameContext;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use overlap::{apply_overlap, compute_overlap};
pub use row::{speed_for_lane, InvalidRowGeometry, Row};
pub use session::GameSession;

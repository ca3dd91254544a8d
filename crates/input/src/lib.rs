//! Terminal input module (binary-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], with separate
//! keymaps for gameplay and initials entry, plus a global quit predicate
//! the binary honors from any phase.

pub mod map;

pub use tui_stacker_types as types;

pub use map::{handle_key_event, handle_text_entry_key, should_quit};

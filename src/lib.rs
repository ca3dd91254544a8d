//! TUI Stacker (workspace facade crate).
//!
//! This package keeps the `tui_stacker::{core,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_stacker_core as core;
pub use tui_stacker_input as input;
pub use tui_stacker_term as term;
pub use tui_stacker_types as types;

//! Terminal rendering module.
//!
//! - [`fb`]: framebuffer of styled character cells
//! - [`renderer`]: crossterm-backed terminal lifecycle and frame flushing
//! - [`game_view`]: pure mapping from game state to a framebuffer

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_stacker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

//! Terminal rendering module.
//!
//! Renders the game into a plain framebuffer of styled glyphs and flushes
//! it to the terminal with diff-based redraws. `GameView` is pure and
//! unit-testable; only `TerminalRenderer` touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

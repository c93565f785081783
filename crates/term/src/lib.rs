//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Rendering is a pure function of a snapshot and a viewport
//! - Emoji card faces are laid out as two-column glyphs

pub mod fb;
pub mod game_view;
pub mod redraw;
pub mod renderer;

pub use tui_memorize_core as core;
pub use tui_memorize_types as types;

pub use fb::{display_width, Cell, CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, GridLayout, HitTarget, Viewport};
pub use redraw::RedrawGate;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

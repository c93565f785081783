//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s (or
//! click positions that the view resolves to cards and buttons).

pub mod map;

pub use tui_memorize_types as types;

pub use map::{click_position, handle_key_event, should_quit};

//! TUI Memorize (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_memorize::{core,input,term,types}` and adds the
//! application plumbing used by the binary (CLI, config file, logging).

pub use tui_memorize_core as core;
pub use tui_memorize_input as input;
pub use tui_memorize_term as term;
pub use tui_memorize_types as types;

pub mod cli;
pub mod config;
pub mod logging;

//! Core game logic module - pure and testable
//!
//! This module contains the theme table, the deck builder, per-card face
//! state and the controller that keeps theme and pair count consistent.
//! It has **no dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: a seeded [`DeckRng`] reproduces every deal
//! - **Testable**: unit tests next to each rule
//! - **Portable**: usable behind any frontend (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`theme`]: fixed registry of named emoji themes
//! - [`card`]: a symbol plus its own face orientation
//! - [`deck`]: builds a shuffled deck of pairs
//! - [`pairs`]: pair count bounds per theme
//! - [`game_state`]: selected theme, pair count, dealt deck and cursor
//! - [`store`]: observable wrapper that signals state changes
//! - [`snapshot`]: immutable view of the state for rendering
//! - [`rng`]: seedable random source
//!
//! # Rules
//!
//! - A deck holds the first `pair_count` symbols of the theme, each twice,
//!   in uniformly random order, all face down.
//! - `pair_count` stays within `[MIN_PAIR_COUNT, symbols / 2]`; adjustments
//!   past either end are ignored.
//! - Changing theme or pair count deals a new deck; flipping toggles one card.
//!
//! # Example
//!
//! ```
//! use tui_memorize_core::GameState;
//!
//! let mut game = GameState::with_seed("Winter ❄️", 7);
//! assert_eq!(game.pair_count(), 4);
//! assert_eq!(game.deck().len(), 8);
//!
//! // Nine symbols allow at most four pairs.
//! assert!(!game.increase_pair_count());
//!
//! game.flip(0);
//! assert!(game.deck()[0].is_face_up());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game_state;
pub mod pairs;
pub mod rng;
pub mod snapshot;
pub mod store;
pub mod theme;

pub use tui_memorize_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use deck::build_deck;
pub use error::{GameError, GameResult};
pub use game_state::GameState;
pub use pairs::PairBounds;
pub use rng::DeckRng;
pub use snapshot::GameSnapshot;
pub use store::Store;
pub use theme::{Theme, DEFAULT_THEME};

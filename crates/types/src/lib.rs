//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Pair Count Bounds
//!
//! A deck always holds `2 × pair_count` cards. The pair count of a theme with
//! `n` symbols is kept inside `[MIN_PAIR_COUNT, n / 2]`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_PAIR_COUNT` | 4 | Smallest deal offered to the player |
//! | `POLL_MS` | 250 | Event loop poll timeout |
//! | `DEFAULT_CARD_WIDTH` | 8 | Card width in terminal columns |
//! | `DEFAULT_CARD_HEIGHT` | 4 | Card height in terminal rows |
//!
//! # Examples
//!
//! ```
//! use tui_memorize_types::{Face, MIN_PAIR_COUNT};
//!
//! // Cards start face down and flip on interaction
//! let face = Face::default();
//! assert_eq!(face, Face::Down);
//! assert_eq!(face.toggled(), Face::Up);
//!
//! assert_eq!(MIN_PAIR_COUNT, 4);
//! ```

/// Smallest number of pairs a deck may be dealt with
pub const MIN_PAIR_COUNT: usize = 4;

/// Event loop poll timeout in milliseconds
pub const POLL_MS: u64 = 250;

/// Default card width in terminal columns (border included)
pub const DEFAULT_CARD_WIDTH: u16 = 8;

/// Default card height in terminal rows (border included)
pub const DEFAULT_CARD_HEIGHT: u16 = 4;

/// An opaque display string shown on a card face (usually an emoji).
///
/// All symbols live in the process-wide theme table, hence `'static`.
pub type Symbol = &'static str;

/// The two display states of a single card
///
/// Toggling is unbounded and reversible: `Down → Up → Down → ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Symbol hidden (initial state)
    #[default]
    Down,
    /// Symbol visible
    Up,
}

impl Face {
    /// The opposite orientation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memorize_types::Face;
    ///
    /// assert_eq!(Face::Down.toggled(), Face::Up);
    /// assert_eq!(Face::Up.toggled(), Face::Down);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            Face::Down => Face::Up,
            Face::Up => Face::Down,
        }
    }

    pub fn is_up(self) -> bool {
        self == Face::Up
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by keyboard/mouse mapping and consumed by the core controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the card cursor one column left
    MoveLeft,
    /// Move the card cursor one column right
    MoveRight,
    /// Move the card cursor one row up
    MoveUp,
    /// Move the card cursor one row down
    MoveDown,
    /// Flip the card under the cursor
    Flip,
    /// Flip a specific card (mouse tap)
    FlipAt(usize),
    /// Deal one more pair (ignored at the upper bound)
    MorePairs,
    /// Deal one fewer pair (ignored at the lower bound)
    FewerPairs,
    /// Select the next theme in the registry
    NextTheme,
    /// Select the previous theme in the registry
    PreviousTheme,
    /// Select a theme by registry index (selector click)
    SelectTheme(usize),
    /// Deal again with the same theme and pair count
    Reshuffle,
}

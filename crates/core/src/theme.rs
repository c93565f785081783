//! Theme registry - the fixed table of card themes
//!
//! Themes are a process-wide constant: a `static` slice that is never
//! mutated. Lookups by name are exact (emoji suffix included).

use crate::error::{GameError, GameResult};
use crate::pairs::PairBounds;
use crate::types::Symbol;

/// A named collection of symbols usable as card faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Theme {
    pub name: &'static str,
    pub symbols: &'static [Symbol],
    /// Preferred pair count when the theme is selected (clamped to bounds)
    pub default_pairs: usize,
}

impl Theme {
    pub fn pair_bounds(&self) -> PairBounds {
        PairBounds::for_symbol_count(self.symbols.len())
    }

    /// The theme's default pair count, clamped into its bounds
    pub fn initial_pairs(&self) -> usize {
        self.pair_bounds().clamp(self.default_pairs)
    }
}

/// Theme selected at startup when nothing else is configured
pub const DEFAULT_THEME: &str = "Halloween 👻";

static THEMES: [Theme; 5] = [
    Theme {
        name: "Halloween 👻",
        symbols: &["👻", "🎃", "🕷️", "😈", "💀", "🕸️", "🧙", "🙀", "👹"],
        default_pairs: 4,
    },
    Theme {
        name: "Winter ❄️",
        symbols: &["❄️", "☃️", "⛄", "🎿", "🧣", "🧤", "🛷", "🏂", "🌨️"],
        default_pairs: 5,
    },
    Theme {
        name: "Animals 🐶",
        symbols: &[
            "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮",
        ],
        default_pairs: 6,
    },
    Theme {
        name: "Sports ⚽",
        symbols: &["⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸"],
        default_pairs: 5,
    },
    Theme {
        name: "Food 🍕",
        symbols: &[
            "🍕", "🍔", "🌮", "🍣", "🍩", "🍪", "🍎", "🍌", "🍇", "🍉", "🍓", "🍒", "🥐", "🥨",
            "🧀", "🥞",
        ],
        default_pairs: 8,
    },
];

/// All registered themes, in selector order
pub fn all() -> &'static [Theme] {
    &THEMES
}

pub fn find(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

/// Like [`find`], but reports a missing theme as an error
pub fn require(name: &str) -> GameResult<&'static Theme> {
    find(name).ok_or_else(|| GameError::UnknownTheme(name.to_string()))
}

/// Symbols of the named theme; empty if the name is unknown
pub fn lookup(name: &str) -> &'static [Symbol] {
    find(name).map(|t| t.symbols).unwrap_or(&[])
}

pub fn index_of(name: &str) -> Option<usize> {
    THEMES.iter().position(|t| t.name == name)
}

/// Theme after `name` in selector order (wraps). Unknown names start at the first theme.
pub fn next(name: &str) -> &'static Theme {
    match index_of(name) {
        Some(i) => &THEMES[(i + 1) % THEMES.len()],
        None => &THEMES[0],
    }
}

/// Theme before `name` in selector order (wraps). Unknown names start at the last theme.
pub fn previous(name: &str) -> &'static Theme {
    match index_of(name) {
        Some(i) => &THEMES[(i + THEMES.len() - 1) % THEMES.len()],
        None => &THEMES[THEMES.len() - 1],
    }
}

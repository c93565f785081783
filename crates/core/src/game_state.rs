//! Game state module - theme selection, pair count and the dealt deck
//!
//! This module ties together the theme registry, the deck builder and the
//! per-card face state. Any change of theme or pair count deals a brand new
//! deck; flipping touches exactly one card.

use log::{debug, info, warn};

use crate::card::Card;
use crate::deck::build_deck;
use crate::error::{GameError, GameResult};
use crate::pairs::PairBounds;
use crate::rng::DeckRng;
use crate::snapshot::GameSnapshot;
use crate::theme::{self, DEFAULT_THEME};
use crate::types::{GameAction, Symbol};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    theme: String,
    symbols: &'static [Symbol],
    bounds: PairBounds,
    pair_count: usize,
    deck: Vec<Card>,
    cursor: usize,
    rng: DeckRng,
    /// Bumped on every effective change
    revision: u64,
}

impl GameState {
    /// Create a game with the given theme selected and a deck dealt
    pub fn new(theme: &str, rng: DeckRng) -> Self {
        let mut state = Self {
            theme: String::new(),
            symbols: &[],
            bounds: PairBounds::default(),
            pair_count: 0,
            deck: Vec::new(),
            cursor: 0,
            rng,
            revision: 0,
        };
        state.select_theme(theme);
        state
    }

    /// Create a game whose deals are reproducible
    pub fn with_seed(theme: &str, seed: u64) -> Self {
        Self::new(theme, DeckRng::seeded(seed))
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn symbols(&self) -> &'static [Symbol] {
        self.symbols
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn pair_bounds(&self) -> PairBounds {
        self.bounds
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Select a theme by name and deal a fresh deck.
    ///
    /// The pair count becomes the theme's default, clamped to its bounds.
    /// Unknown names are kept as the selection but have no symbols, so the
    /// deck is empty.
    pub fn select_theme(&mut self, name: &str) {
        match theme::require(name) {
            Ok(theme) => {
                self.symbols = theme.symbols;
                self.bounds = theme.pair_bounds();
                self.pair_count = theme.initial_pairs();
                info!("theme {:?} selected with {} pairs", theme.name, self.pair_count);
            }
            Err(err) => {
                warn!("{err}; dealing an empty deck");
                self.symbols = theme::lookup(name);
                self.bounds = PairBounds::for_symbol_count(self.symbols.len());
                self.pair_count = self.bounds.clamp(0);
            }
        }
        self.theme = name.to_string();
        self.deal();
    }

    pub fn next_theme(&mut self) {
        let next = theme::next(&self.theme);
        self.select_theme(next.name);
    }

    pub fn previous_theme(&mut self) {
        let previous = theme::previous(&self.theme);
        self.select_theme(previous.name);
    }

    /// Set the pair count, dealing a new deck when it changes.
    pub fn set_pair_count(&mut self, pairs: usize) -> GameResult<()> {
        if !self.bounds.contains(pairs) {
            return Err(GameError::PairCountOutOfBounds {
                requested: pairs,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        if pairs != self.pair_count {
            self.pair_count = pairs;
            self.deal();
        }
        Ok(())
    }

    /// Deal one more pair. Returns `false` (and changes nothing) at the upper bound.
    pub fn increase_pair_count(&mut self) -> bool {
        self.adjust_pair_count(1)
    }

    /// Deal one fewer pair. Returns `false` (and changes nothing) at the lower bound.
    pub fn decrease_pair_count(&mut self) -> bool {
        self.adjust_pair_count(-1)
    }

    fn adjust_pair_count(&mut self, delta: isize) -> bool {
        let Some(requested) = self.pair_count.checked_add_signed(delta) else {
            debug!("ignoring pair count adjustment below zero");
            return false;
        };
        match self.set_pair_count(requested) {
            Ok(()) => true,
            Err(err) => {
                debug!("ignoring pair count adjustment: {err}");
                false
            }
        }
    }

    /// Deal again with the same theme and pair count.
    pub fn reshuffle(&mut self) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        self.deal();
        true
    }

    fn deal(&mut self) {
        self.deck = build_deck(self.symbols, self.pair_count, &mut self.rng);
        self.cursor = 0;
        self.bump();
        debug!("dealt {} cards from {:?}", self.deck.len(), self.theme);
    }

    /// Toggle one card's face.
    pub fn try_flip(&mut self, index: usize) -> GameResult<()> {
        let len = self.deck.len();
        let card = self
            .deck
            .get_mut(index)
            .ok_or(GameError::CardOutOfRange { index, len })?;
        card.toggle();
        self.bump();
        Ok(())
    }

    /// Toggle one card's face. Out-of-range indices are ignored.
    pub fn flip(&mut self, index: usize) -> bool {
        self.try_flip(index).is_ok()
    }

    pub fn flip_at_cursor(&mut self) -> bool {
        self.flip(self.cursor)
    }

    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index >= self.deck.len() || index == self.cursor {
            return false;
        }
        self.cursor = index;
        self.bump();
        true
    }

    /// Move the cursor by `step` cards in reading order, stopping at the ends.
    pub fn step_cursor(&mut self, step: isize) -> bool {
        match self.cursor.checked_add_signed(step) {
            Some(index) => self.set_cursor(index),
            None => false,
        }
    }

    /// Move the cursor `dx` columns and `dy` rows on a grid `columns` wide.
    pub fn move_cursor(&mut self, dx: isize, dy: isize, columns: usize) -> bool {
        let row = columns.max(1) as isize;
        self.step_cursor(dx + dy * row)
    }

    /// Apply an action. `columns` is the current grid width, used for
    /// vertical cursor movement.
    ///
    /// Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction, columns: usize) -> bool {
        match action {
            GameAction::MoveLeft => self.move_cursor(-1, 0, columns),
            GameAction::MoveRight => self.move_cursor(1, 0, columns),
            GameAction::MoveUp => self.move_cursor(0, -1, columns),
            GameAction::MoveDown => self.move_cursor(0, 1, columns),
            GameAction::Flip => self.flip_at_cursor(),
            GameAction::FlipAt(index) => {
                let flipped = self.flip(index);
                if flipped {
                    self.cursor = index;
                }
                flipped
            }
            GameAction::MorePairs => self.increase_pair_count(),
            GameAction::FewerPairs => self.decrease_pair_count(),
            GameAction::NextTheme => {
                self.next_theme();
                true
            }
            GameAction::PreviousTheme => {
                self.previous_theme();
                true
            }
            GameAction::SelectTheme(index) => match theme::all().get(index) {
                Some(theme) if theme.name != self.theme => {
                    self.select_theme(theme.name);
                    true
                }
                _ => false,
            },
            GameAction::Reshuffle => self.reshuffle(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.theme.clear();
        out.theme.push_str(&self.theme);
        out.theme_index = theme::index_of(&self.theme);
        out.theme_count = theme::all().len();
        out.pair_count = self.pair_count;
        out.bounds = self.bounds;
        out.cards.clear();
        out.cards.extend_from_slice(&self.deck);
        out.cursor = self.cursor;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_THEME, DeckRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Face;

    const HALLOWEEN: &str = "Halloween 👻";
    const WINTER: &str = "Winter ❄️";

    #[test]
    fn test_new_game_deals_default_pairs() {
        let state = GameState::with_seed(HALLOWEEN, 1);
        assert_eq!(state.theme(), HALLOWEEN);
        assert_eq!(state.pair_count(), 4);
        assert_eq!(state.deck().len(), 8);
        assert!(state.deck().iter().all(|c| c.face == Face::Down));
    }

    #[test]
    fn test_halloween_rejects_fifth_pair() {
        let mut state = GameState::with_seed(HALLOWEEN, 1);
        let before = state.deck().to_vec();
        let rev = state.revision();

        assert!(!state.increase_pair_count());
        assert_eq!(state.pair_count(), 4);
        assert_eq!(state.deck(), &before[..]);
        assert_eq!(state.revision(), rev);
        assert_eq!(
            state.set_pair_count(5),
            Err(GameError::PairCountOutOfBounds {
                requested: 5,
                min: 4,
                max: 4
            })
        );
    }

    #[test]
    fn test_winter_is_pinned_at_four_pairs() {
        let mut state = GameState::with_seed(WINTER, 1);
        assert_eq!(state.pair_count(), 4);
        assert!(!state.increase_pair_count());
        assert!(!state.decrease_pair_count());
        assert_eq!(state.pair_count(), 4);
        assert_eq!(state.deck().len(), 8);
    }

    #[test]
    fn test_adjusting_rebuilds_deck() {
        let mut state = GameState::with_seed("Food 🍕", 9);
        assert_eq!(state.pair_count(), 8);
        state.flip(0);

        assert!(state.decrease_pair_count());
        assert_eq!(state.pair_count(), 7);
        assert_eq!(state.deck().len(), 14);
        assert!(state.deck().iter().all(|c| !c.is_face_up()));

        assert!(state.increase_pair_count());
        assert_eq!(state.deck().len(), 16);
        assert!(!state.increase_pair_count());
    }

    #[test]
    fn test_theme_change_resets_pair_count() {
        let mut state = GameState::with_seed("Food 🍕", 3);
        state.decrease_pair_count();
        state.decrease_pair_count();
        assert_eq!(state.pair_count(), 6);

        state.select_theme("Animals 🐶");
        assert_eq!(state.pair_count(), 6);
        state.select_theme("Food 🍕");
        assert_eq!(state.pair_count(), 8);
    }

    #[test]
    fn test_unknown_theme_deals_nothing() {
        let mut state = GameState::with_seed("Bogus", 1);
        assert_eq!(state.theme(), "Bogus");
        assert!(state.symbols().is_empty());
        assert_eq!(state.pair_count(), 0);
        assert!(state.deck().is_empty());
        assert!(!state.increase_pair_count());
        assert!(!state.decrease_pair_count());
        assert!(!state.reshuffle());
        assert!(!state.flip(0));
    }

    #[test]
    fn test_flip_only_touches_one_card() {
        let mut state = GameState::with_seed(HALLOWEEN, 4);
        assert!(state.flip(3));
        for (i, card) in state.deck().iter().enumerate() {
            assert_eq!(card.is_face_up(), i == 3);
        }
        assert!(state.flip(3));
        assert!(state.deck().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_flip_out_of_range_is_ignored() {
        let mut state = GameState::with_seed(HALLOWEEN, 4);
        let rev = state.revision();
        assert!(!state.flip(8));
        assert_eq!(
            state.try_flip(8),
            Err(GameError::CardOutOfRange { index: 8, len: 8 })
        );
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn test_cursor_moves_in_reading_order() {
        let mut state = GameState::with_seed(HALLOWEEN, 4);
        assert!(!state.apply_action(GameAction::MoveLeft, 4));
        assert!(state.apply_action(GameAction::MoveRight, 4));
        assert_eq!(state.cursor(), 1);
        assert!(state.apply_action(GameAction::MoveDown, 4));
        assert_eq!(state.cursor(), 5);
        assert!(!state.apply_action(GameAction::MoveDown, 4));
        assert!(state.apply_action(GameAction::MoveUp, 4));
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_move_cursor_combines_rows_and_columns() {
        let mut state = GameState::with_seed(HALLOWEEN, 4);
        assert!(state.move_cursor(1, 1, 3));
        assert_eq!(state.cursor(), 4);
        // Past the last card: nothing moves.
        assert!(!state.move_cursor(0, 2, 3));
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_flip_at_moves_cursor() {
        let mut state = GameState::with_seed(HALLOWEEN, 4);
        assert!(state.apply_action(GameAction::FlipAt(6), 4));
        assert_eq!(state.cursor(), 6);
        assert!(state.deck()[6].is_face_up());
    }

    #[test]
    fn test_reshuffle_keeps_multiset() {
        let mut state = GameState::with_seed("Animals 🐶", 8);
        let mut before: Vec<_> = state.deck().iter().map(|c| c.content).collect();
        state.flip(0);
        assert!(state.reshuffle());
        let mut after: Vec<_> = state.deck().iter().map(|c| c.content).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert!(state.deck().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_theme_cycle_visits_all() {
        let mut state = GameState::with_seed(theme::all()[0].name, 1);
        for expected in theme::all().iter().skip(1) {
            state.apply_action(GameAction::NextTheme, 4);
            assert_eq!(state.theme(), expected.name);
        }
        state.apply_action(GameAction::NextTheme, 4);
        assert_eq!(state.theme(), theme::all()[0].name);
        state.apply_action(GameAction::PreviousTheme, 4);
        assert_eq!(state.theme(), theme::all()[theme::all().len() - 1].name);
    }

    #[test]
    fn test_select_theme_by_index() {
        let mut state = GameState::with_seed(HALLOWEEN, 1);
        let rev = state.revision();
        assert!(!state.apply_action(GameAction::SelectTheme(0), 4));
        assert_eq!(state.revision(), rev);
        assert!(!state.apply_action(GameAction::SelectTheme(99), 4));
        assert!(state.apply_action(GameAction::SelectTheme(1), 4));
        assert_eq!(state.theme(), WINTER);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::with_seed(WINTER, 2);
        state.flip(1);
        let snap = state.snapshot();
        assert_eq!(snap.theme, WINTER);
        assert_eq!(snap.theme_index, Some(1));
        assert_eq!(snap.theme_count, theme::all().len());
        assert_eq!(snap.pair_count, 4);
        assert_eq!(snap.cards, state.deck());
        assert_eq!(snap.face_up_count(), 1);
        assert_eq!(snap.revision, state.revision());
        assert!(!snap.can_add_pair());
        assert!(!snap.can_remove_pair());
    }
}

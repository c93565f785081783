//! Deck builder
//!
//! Deals `2 × pair_count` face-down cards: the first `pair_count` symbols of
//! a theme, each duplicated, in a uniformly random order.

use crate::card::Card;
use crate::rng::DeckRng;
use crate::types::Symbol;

/// Build a shuffled deck from the first `pair_count` symbols.
///
/// The caller is responsible for keeping `pair_count` within the theme's
/// bounds; this function does not clamp. Symbols past the end of the list
/// simply do not exist, so an empty list (unknown theme) always yields an
/// empty deck.
pub fn build_deck(symbols: &[Symbol], pair_count: usize, rng: &mut DeckRng) -> Vec<Card> {
    let chosen = &symbols[..pair_count.min(symbols.len())];

    let mut cards = Vec::with_capacity(chosen.len() * 2);
    cards.extend(chosen.iter().map(|&s| Card::new(s)));
    cards.extend(chosen.iter().map(|&s| Card::new(s)));
    rng.shuffle(&mut cards);
    cards
}

//! Integration tests for the game controller and store

use std::cell::RefCell;
use std::rc::Rc;

use tui_memorize::core::{theme, GameError, GameState, Store, DEFAULT_THEME};
use tui_memorize::types::{GameAction, MIN_PAIR_COUNT};

#[test]
fn test_halloween_scenario() {
    let mut state = GameState::with_seed("Halloween 👻", 1);
    assert_eq!(state.symbols().len(), 9);
    assert_eq!(state.pair_count(), 4);
    assert_eq!(state.deck().len(), 8);

    // 5 pairs would need 10 symbols.
    assert!(!state.increase_pair_count());
    assert_eq!(state.pair_count(), 4);
    assert!(matches!(
        state.set_pair_count(5),
        Err(GameError::PairCountOutOfBounds { requested: 5, min: 4, max: 4 })
    ));
}

#[test]
fn test_winter_scenario() {
    let mut state = GameState::with_seed("Winter ❄️", 1);
    // Declared default of 5 is clamped to the 9-symbol maximum.
    assert_eq!(state.pair_count(), 4);
    let revision = state.revision();

    assert!(!state.increase_pair_count());
    assert!(!state.decrease_pair_count());
    assert_eq!(state.pair_count(), MIN_PAIR_COUNT);
    assert_eq!(state.revision(), revision);
}

#[test]
fn test_animals_adjusts_within_bounds() {
    let mut state = GameState::with_seed("Animals 🐶", 3);
    assert_eq!(state.pair_count(), 6);
    assert!(!state.increase_pair_count());
    assert!(state.decrease_pair_count());
    assert!(state.decrease_pair_count());
    assert_eq!(state.pair_count(), 4);
    assert_eq!(state.deck().len(), 8);
    assert!(!state.decrease_pair_count());
}

#[test]
fn test_unknown_theme_is_degenerate_but_usable() {
    let mut state = GameState::with_seed("Bogus", 1);
    assert_eq!(state.theme(), "Bogus");
    assert_eq!(state.pair_count(), 0);
    assert!(state.deck().is_empty());
    assert!(!state.increase_pair_count());
    assert!(!state.flip_at_cursor());
    assert!(!state.reshuffle());

    // Cycling out of an unknown theme lands on a real one.
    state.next_theme();
    assert_eq!(state.theme(), theme::all()[0].name);
    assert!(!state.deck().is_empty());
}

#[test]
fn test_toggle_is_involutive_through_actions() {
    let mut state = GameState::with_seed(DEFAULT_THEME, 9);
    let before = state.deck().to_vec();
    assert!(state.apply_action(GameAction::Flip, 4));
    assert!(state.deck()[0].is_face_up());
    assert!(state.apply_action(GameAction::Flip, 4));
    assert_eq!(state.deck(), &before[..]);
}

#[test]
fn test_theme_change_deals_face_down() {
    let mut state = GameState::with_seed(DEFAULT_THEME, 9);
    state.flip(0);
    state.flip(3);
    assert!(state.apply_action(GameAction::NextTheme, 4));
    assert!(state.deck().iter().all(|c| !c.is_face_up()));
    assert_eq!(state.cursor(), 0);
}

#[test]
fn test_store_notifies_only_on_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = Store::new(GameState::with_seed("Halloween 👻", 11));
    {
        let seen = Rc::clone(&seen);
        store.subscribe(move |snap| seen.borrow_mut().push((snap.revision, snap.pair_count)));
    }

    assert!(!store.dispatch(GameAction::MorePairs));
    assert!(!store.dispatch(GameAction::MoveLeft));
    assert!(!store.dispatch(GameAction::FlipAt(99)));
    assert!(seen.borrow().is_empty());

    assert!(store.dispatch(GameAction::Flip));
    assert!(store.dispatch(GameAction::SelectTheme(4)));
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].1, 8);
    assert!(seen[0].0 < seen[1].0);
    assert_eq!(seen[1].0, store.revision());
}

#[test]
fn test_store_uses_reported_columns() {
    let mut store = Store::new(GameState::with_seed("Food 🍕", 11));
    store.set_columns(5);
    assert!(store.dispatch(GameAction::MoveDown));
    assert_eq!(store.state().cursor(), 5);

    store.set_columns(0);
    assert_eq!(store.columns(), 1);
}

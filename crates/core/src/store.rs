//! Observable game store
//!
//! Owns a [`GameState`] and tells interested parties when it changed. The
//! terminal loop polls [`Store::revision`]; other consumers can register a
//! listener that receives a fresh snapshot after every effective change.
//! Rejected actions (bounds violations, out-of-range flips) notify nobody.

use crate::game_state::GameState;
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

type Listener = Box<dyn FnMut(&GameSnapshot)>;

pub struct Store {
    state: GameState,
    listeners: Vec<Listener>,
    /// Grid width last reported by the view
    columns: usize,
}

impl Store {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            columns: 1,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Record the grid width used for vertical cursor movement.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&GameSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an action; listeners run only if it changed something.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        let columns = self.columns;
        self.update(|state| state.apply_action(action, columns))
    }

    /// Run an arbitrary mutation, notifying listeners if the revision moved.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let before = self.state.revision();
        let out = f(&mut self.state);
        if self.state.revision() != before {
            self.notify();
        }
        out
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snap = self.state.snapshot();
        for listener in &mut self.listeners {
            listener(&snap);
        }
    }
}

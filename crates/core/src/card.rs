use crate::types::{Face, Symbol};

/// A single card on the table.
///
/// Each card carries its own face orientation, so two cards showing the same
/// symbol flip independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub content: Symbol,
    pub face: Face,
}

impl Card {
    /// A new, face-down card
    pub const fn new(content: Symbol) -> Self {
        Self {
            content,
            face: Face::Down,
        }
    }

    pub fn toggle(&mut self) {
        self.face = self.face.toggled();
    }

    pub fn is_face_up(&self) -> bool {
        self.face.is_up()
    }
}
